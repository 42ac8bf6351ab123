//! Personality quiz.
//!
//! Four questions, four answers each. Every answer letter leans toward one
//! archetype; the most frequent letter wins, and ties go to whichever of the
//! tied letters was answered first.

use serde::{Deserialize, Serialize};

use crate::error::{SessionError, SessionResult};
use crate::profile::DecisionArchetype;

/// One answer letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizAnswer {
    /// Procrastination.
    A,
    /// Vibes.
    B,
    /// Chaos.
    C,
    /// Spreadsheets.
    D,
}

impl QuizAnswer {
    /// Parse a letter, case-insensitive.
    pub fn parse(c: char) -> SessionResult<Self> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            'C' => Ok(Self::C),
            'D' => Ok(Self::D),
            other => Err(SessionError::InvalidAnswer(other)),
        }
    }

    /// Parse a string of letters like "ABCD", ignoring whitespace.
    pub fn parse_all(s: &str) -> SessionResult<Vec<Self>> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(Self::parse)
            .collect()
    }

    fn archetype(self) -> DecisionArchetype {
        match self {
            Self::A => DecisionArchetype::ProcrastinationWarrior,
            Self::B => DecisionArchetype::VibeChaser,
            Self::C => DecisionArchetype::ChaosAgent,
            Self::D => DecisionArchetype::SpreadsheetQueen,
        }
    }
}

/// A quiz question with answers in A-D order.
#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    /// The prompt.
    pub prompt: &'static str,
    /// Answer texts for A, B, C, D.
    pub answers: [&'static str; 4],
}

/// The quiz.
pub const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: "When ordering at a restaurant, you:",
        answers: [
            "Order the same thing every time 🍕",
            "Ask the waiter what's good 💁‍♀️",
            "Close my eyes and point 🎯",
            "Spend 20 minutes analyzing the menu 📊",
        ],
    },
    QuizQuestion {
        prompt: "Your ideal weekend plans:",
        answers: [
            "Netflix and procrastinate 🛋️",
            "Whatever feels right in the moment ✨",
            "Something completely random 🎲",
            "Color-coded itinerary 📅",
        ],
    },
    QuizQuestion {
        prompt: "When facing a big life decision:",
        answers: [
            "Sleep on it... for weeks 😴",
            "Trust my gut vibes 🧘‍♀️",
            "Flip a coin and embrace chaos 🪙",
            "Make a pros/cons spreadsheet 📈",
        ],
    },
    QuizQuestion {
        prompt: "Your friends describe you as:",
        answers: [
            "The one who overthinks everything 🤔",
            "The free spirit who goes with the flow 🌊",
            "The wild card who keeps things interesting 🃏",
            "The organized planner 📋",
        ],
    },
];

/// Pick the archetype for a set of answers.
///
/// No answers at all yields [`DecisionArchetype::OverthinkingGenius`].
pub fn score(answers: &[QuizAnswer]) -> DecisionArchetype {
    // (letter, count) in order of first appearance
    let mut tally: Vec<(QuizAnswer, usize)> = Vec::new();
    for &answer in answers {
        match tally.iter_mut().find(|(a, _)| *a == answer) {
            Some((_, count)) => *count += 1,
            None => tally.push((answer, 1)),
        }
    }

    let mut best: Option<(QuizAnswer, usize)> = None;
    for (answer, count) in tally {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((answer, count));
        }
    }
    best.map_or(DecisionArchetype::OverthinkingGenius, |(a, _)| a.archetype())
}

/// A quiz in progress.
#[derive(Debug, Clone, Default)]
pub struct Quiz {
    answers: Vec<QuizAnswer>,
}

impl Quiz {
    /// Start a new quiz.
    pub fn new() -> Self {
        Self::default()
    }

    /// The question waiting for an answer, or `None` when done.
    pub fn current(&self) -> Option<&'static QuizQuestion> {
        QUESTIONS.get(self.answers.len())
    }

    /// 1-based number of the current question.
    pub fn question_number(&self) -> usize {
        self.answers.len() + 1
    }

    /// Answer the current question. Returns the archetype once all are answered.
    pub fn answer(&mut self, answer: QuizAnswer) -> Option<DecisionArchetype> {
        if self.is_finished() {
            return Some(score(&self.answers));
        }
        self.answers.push(answer);
        self.is_finished().then(|| score(&self.answers))
    }

    /// Whether every question has been answered.
    pub fn is_finished(&self) -> bool {
        self.answers.len() >= QUESTIONS.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(s: &str) -> Vec<QuizAnswer> {
        QuizAnswer::parse_all(s).unwrap()
    }

    #[test]
    fn four_questions_four_answers() {
        assert_eq!(QUESTIONS.len(), 4);
        for q in QUESTIONS {
            assert!(q.answers.iter().all(|a| !a.is_empty()));
        }
    }

    #[test]
    fn dominant_letter_wins() {
        assert_eq!(score(&answers("CCAD")), DecisionArchetype::ChaosAgent);
        assert_eq!(score(&answers("DDDD")), DecisionArchetype::SpreadsheetQueen);
        assert_eq!(score(&answers("abaa")), DecisionArchetype::ProcrastinationWarrior);
    }

    #[test]
    fn ties_go_to_first_seen() {
        assert_eq!(score(&answers("BDDB")), DecisionArchetype::VibeChaser);
        assert_eq!(score(&answers("DBBD")), DecisionArchetype::SpreadsheetQueen);
        assert_eq!(score(&answers("CADB")), DecisionArchetype::ChaosAgent);
    }

    #[test]
    fn no_answers_is_overthinking() {
        assert_eq!(score(&[]), DecisionArchetype::OverthinkingGenius);
    }

    #[test]
    fn invalid_letter_rejected() {
        let err = QuizAnswer::parse_all("ABX").unwrap_err();
        assert!(matches!(err, SessionError::InvalidAnswer('X')));
    }

    #[test]
    fn quiz_walkthrough() {
        let mut quiz = Quiz::new();
        assert_eq!(quiz.current().unwrap().prompt, QUESTIONS[0].prompt);
        assert_eq!(quiz.answer(QuizAnswer::B), None);
        assert_eq!(quiz.answer(QuizAnswer::B), None);
        assert_eq!(quiz.question_number(), 3);
        assert_eq!(quiz.answer(QuizAnswer::C), None);
        assert_eq!(quiz.answer(QuizAnswer::A), Some(DecisionArchetype::VibeChaser));
        assert!(quiz.is_finished());
        assert!(quiz.current().is_none());
    }
}
