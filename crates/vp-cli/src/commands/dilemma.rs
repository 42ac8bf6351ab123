use chrono::{Local, NaiveDate};
use colored::Colorize;

use vp_engine::Engine;
use vp_session::dilemma::dilemma_for;

pub fn run(date: Option<&str>, pick: bool, seed: Option<u64>) -> Result<(), String> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| format!("invalid date '{s}': {e}"))?,
        None => Local::now().date_naive(),
    };
    let dilemma = dilemma_for(date);

    println!("  {} {}", "🌅 Daily Dilemma Challenge".bold(), date);
    println!("  {}", dilemma.question);
    println!("  Category: {}", dilemma.category.dimmed());
    for option in dilemma.options {
        println!("    - {option}");
    }

    if pick {
        println!();
        let mut rng = super::rng(seed);
        let result = Engine::default()
            .decide(&dilemma.to_request(), &mut rng)
            .map_err(|e| e.to_string())?;
        super::print_result(&result);
    }
    Ok(())
}
