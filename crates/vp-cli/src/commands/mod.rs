pub mod dilemma;
pub mod pick;
pub mod play;
pub mod quiz;
pub mod wyr;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;
use vp_engine::DecisionResult;

/// Seeded RNG, or one seeded from the OS.
fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Print a decision the way the result card shows it.
fn print_result(result: &DecisionResult) {
    println!(
        "  {} {} Says...",
        result.mode.emoji(),
        result.mode.title().bold()
    );
    if !result.context.is_empty() {
        println!("  {}", result.context.dimmed());
    }
    println!();
    println!("  {}", result.selected_option.green().bold());
    println!("  {}", result.message);
    println!("  {}", result.meme_reaction.italic());
    if !result.explanation.is_empty() {
        println!("  {} {}", "Why:".cyan(), result.explanation);
    }
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Option", ""]);
    for (i, option) in result.options.iter().enumerate() {
        let mark = if i == result.selected_index { "✅" } else { "" };
        table.add_row(vec![(i + 1).to_string(), option.clone(), mark.to_string()]);
    }
    println!("{table}");
    if result.shuffled {
        println!("  {}", "Chaos shuffled the options first.".yellow());
    }
}
