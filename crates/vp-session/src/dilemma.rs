//! Daily dilemma.
//!
//! One dilemma per calendar day, chosen by day of year so every lookup on the
//! same date agrees.

use chrono::{Datelike, NaiveDate};
use vp_engine::{DecisionRequest, Mode};

/// A themed multi-option challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dilemma {
    /// Stable id.
    pub id: &'static str,
    /// The prompt.
    pub question: &'static str,
    /// Options to choose from.
    pub options: &'static [&'static str],
    /// Category label.
    pub category: &'static str,
}

impl Dilemma {
    /// A decision request for this dilemma: random mode, question as context.
    pub fn to_request(&self) -> DecisionRequest {
        DecisionRequest::new(self.options.iter().copied())
            .with_mode_spec(Mode::Random)
            .with_context(self.question)
    }
}

/// The rotation.
pub const DILEMMAS: &[Dilemma] = &[
    Dilemma {
        id: "breakfast-chaos",
        question: "Pick your chaotic breakfast combo! 🍳",
        options: &[
            "🥞 Pancakes with hot sauce",
            "🌮 Breakfast burrito with ice cream",
            "🍣 Sushi for breakfast",
            "🍩 Donut sandwich",
        ],
        category: "Food Adventures",
    },
    Dilemma {
        id: "vibe-check",
        question: "Choose your main character energy for today! ✨",
        options: &[
            "💼 Corporate baddie",
            "🛋️ Cozy goblin mode",
            "🎧 Mysterious background character",
            "🌪️ Chaotic good energy",
        ],
        category: "Daily Vibes",
    },
    Dilemma {
        id: "social-dilemma",
        question: "Pick your weekend social battery level! 🔋",
        options: &[
            "🎉 Party animal mode",
            "👥 Small group hangout",
            "📱 Virtual socializing only",
            "🏠 Hermit crab lifestyle",
        ],
        category: "Social Energy",
    },
    Dilemma {
        id: "creative-chaos",
        question: "Choose your creative outlet for the week! 🎨",
        options: &[
            "📝 Write terrible poetry",
            "🎵 Learn a weird instrument",
            "🧶 Crochet something questionable",
            "🎭 Practice dramatic monologues",
        ],
        category: "Creative Expression",
    },
];

/// The dilemma for `date`.
pub fn dilemma_for(date: NaiveDate) -> &'static Dilemma {
    &DILEMMAS[date.ordinal0() as usize % DILEMMAS.len()]
}
