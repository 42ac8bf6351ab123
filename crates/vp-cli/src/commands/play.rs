use std::io::{self, BufRead, Write};

use colored::Colorize;

use vp_session::{AppState, SessionConfig};

pub fn run(seed: Option<u64>, chaos: u32) -> Result<(), String> {
    let mut config = SessionConfig::default().with_chaos(chaos);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut state = AppState::new(config);
    banner(&state);

    prompt(&state)?;
    for line in io::stdin().lock().lines() {
        let line = line.map_err(|e| e.to_string())?;
        let input = line.trim();
        if input.is_empty() {
            prompt(&state)?;
            continue;
        }

        match state.process(input) {
            Ok(output) if is_quit(input) => {
                println!("{output}");
                return Ok(());
            }
            Ok(output) if output.is_empty() => {}
            Ok(output) => println!("{output}\n"),
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
        prompt(&state)?;
    }

    println!();
    Ok(())
}

fn banner(state: &AppState) {
    let chaos = state.profile().chaos_level;
    let threshold = state.engine().config().chaos_threshold;
    println!("  {} Vibepick session", "Starting".bold());
    println!(
        "  Chaos: {}/100, {} (options get shuffled above {threshold})",
        chaos.value(),
        chaos.vibe()
    );
    println!("  Add options with 'option add <text>', then 'pick'.");
    println!("  Type 'help' for commands, 'quit' to exit.\n");
}

/// `🎲 2> ` shows the sticky mode and how many options are queued.
fn prompt(state: &AppState) -> Result<(), String> {
    print!("{} {}> ", state.mode().emoji(), state.options().len());
    io::stdout().flush().map_err(|e| e.to_string())
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_ascii_lowercase().as_str(), "quit" | "q")
}
