use std::io::{self, BufRead, Write};

use colored::Colorize;

use vp_session::DecisionArchetype;
use vp_session::quiz::{QUESTIONS, Quiz, QuizAnswer, score};

pub fn run(answers: Option<&str>) -> Result<(), String> {
    let archetype = match answers {
        Some(letters) => {
            let answers = QuizAnswer::parse_all(letters).map_err(|e| e.to_string())?;
            if answers.len() != QUESTIONS.len() {
                return Err(format!(
                    "expected {} answers, got {}",
                    QUESTIONS.len(),
                    answers.len()
                ));
            }
            score(&answers)
        }
        None => interactive()?,
    };

    print_archetype(archetype);
    Ok(())
}

fn interactive() -> Result<DecisionArchetype, String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();
    let mut quiz = Quiz::new();

    while let Some(question) = quiz.current() {
        println!(
            "  {} {}",
            format!("Q{}.", quiz.question_number()).bold(),
            question.prompt
        );
        for (letter, answer) in ['A', 'B', 'C', 'D'].iter().zip(question.answers) {
            println!("    {letter}) {answer}");
        }

        loop {
            print!("> ");
            io::stdout().flush().map_err(|e| e.to_string())?;
            line.clear();
            if reader.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
                return Err("quiz aborted".into());
            }
            let Some(c) = line.trim().chars().next() else {
                continue;
            };
            match QuizAnswer::parse(c) {
                Ok(answer) => {
                    if let Some(archetype) = quiz.answer(answer) {
                        println!();
                        return Ok(archetype);
                    }
                    break;
                }
                Err(e) => println!("{}", e.to_string().yellow()),
            }
        }
        println!();
    }

    Err("quiz has no questions".into())
}

fn print_archetype(archetype: DecisionArchetype) {
    println!(
        "  {} You are {}",
        archetype.mascot(),
        archetype.name().bold()
    );
    println!("  {}", archetype.description());
}
