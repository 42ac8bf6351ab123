use colored::Colorize;

use vp_session::wyr::{Choice, WyrDeck};

pub fn run(seed: Option<u64>, count: usize, answers: Option<&str>) -> Result<(), String> {
    let mut rng = super::rng(seed);
    let mut deck = WyrDeck::shuffled(&mut rng);

    let Some(answers) = answers else {
        println!("  {} Would You Rather...\n", "🤔".bold());
        for (i, q) in deck.questions().iter().take(count).enumerate() {
            println!("  {}. {} [{}]", i + 1, q.emoji, q.theme.dimmed());
            println!("     {} {}", "A:".cyan(), q.option_a);
            println!("     {} {}", "B:".magenta(), q.option_b);
            println!();
        }
        return Ok(());
    };

    for c in answers.chars().filter(|c| !c.is_whitespace()) {
        let choice = Choice::parse(&c.to_string())
            .ok_or_else(|| format!("invalid answer '{c}', use A or B"))?;
        if !deck.answer(choice) {
            return Err(format!(
                "too many answers, the deck has {} questions",
                deck.questions().len()
            ));
        }
    }

    println!("  {} You would rather...\n", "🤔".bold());
    for q in deck.questions() {
        let Some(choice) = deck.answer_for(q.id) else {
            break;
        };
        let (picked, skipped) = match choice {
            Choice::A => (q.option_a, q.option_b),
            Choice::B => (q.option_b, q.option_a),
        };
        println!("  {} {}", q.emoji, picked.bold());
        println!("     {} {}", "over".dimmed(), skipped.dimmed());
    }

    let summary = deck.summary();
    let (answered, total) = deck.progress();
    println!();
    println!(
        "  {answered}/{total} answered: {} A, {} B",
        summary.picked_a.to_string().cyan(),
        summary.picked_b.to_string().magenta()
    );
    Ok(())
}
