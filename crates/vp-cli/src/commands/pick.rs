use std::path::PathBuf;

use vp_engine::{DecisionRequest, FlavorTables, Mood};

pub struct PickArgs {
    pub options: Vec<String>,
    pub mode: String,
    pub mood: Option<String>,
    pub chaos: u32,
    pub context: String,
    pub seed: Option<u64>,
    pub tables: Option<PathBuf>,
    pub json: bool,
}

pub fn run(args: PickArgs) -> Result<(), String> {
    let mood = match args.mood.as_deref() {
        Some(name) => Some(Mood::parse(name).ok_or_else(|| {
            format!("unknown mood '{name}', use: chaotic, chill, productivity, sassy, logical")
        })?),
        None => None,
    };

    let tables = match &args.tables {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            FlavorTables::from_json(&json).map_err(|e| e.to_string())?
        }
        None => FlavorTables::default(),
    };

    let request = DecisionRequest::new(args.options)
        .with_mode(&args.mode)
        .with_mood(mood)
        .with_chaos(args.chaos)
        .with_context(args.context);

    let mut rng = super::rng(args.seed);
    let result = vp_engine::decide(&request, &tables, &mut rng).map_err(|e| e.to_string())?;

    if args.json {
        let out = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        super::print_result(&result);
    }
    Ok(())
}
