//! User profile: quiz archetype, mascot, and chaos preference.

use serde::{Deserialize, Serialize};
use vp_engine::ChaosLevel;

/// The decision-making personality the quiz assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionArchetype {
    /// Goes with the flow.
    VibeChaser,
    /// Color-coded everything.
    SpreadsheetQueen,
    /// Will decide. Eventually.
    ProcrastinationWarrior,
    /// Flips coins for fun.
    ChaosAgent,
    /// Thinks about thinking.
    OverthinkingGenius,
}

impl DecisionArchetype {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::VibeChaser => "The Vibe Chaser",
            Self::SpreadsheetQueen => "The Spreadsheet Queen",
            Self::ProcrastinationWarrior => "The Procrastination Warrior",
            Self::ChaosAgent => "The Chaos Agent",
            Self::OverthinkingGenius => "The Overthinking Genius",
        }
    }

    /// Mascot emoji.
    pub fn mascot(self) -> &'static str {
        match self {
            Self::VibeChaser => "✨",
            Self::SpreadsheetQueen => "📊",
            Self::ProcrastinationWarrior => "🛋️",
            Self::ChaosAgent => "🌪️",
            Self::OverthinkingGenius => "🧠",
        }
    }

    /// One-line blurb.
    pub fn description(self) -> &'static str {
        match self {
            Self::VibeChaser => "You trust your gut and follow the vibes wherever they lead.",
            Self::SpreadsheetQueen => "Pros, cons, pivot tables. You don't guess, you calculate.",
            Self::ProcrastinationWarrior => "Why decide today what you can decide next week?",
            Self::ChaosAgent => "Rules are suggestions and coin flips are a lifestyle.",
            Self::OverthinkingGenius => "You've already considered this from 47 angles.",
        }
    }
}

impl std::fmt::Display for DecisionArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The user's saved preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Quiz result, if taken.
    pub archetype: Option<DecisionArchetype>,
    /// Mascot emoji that came with the archetype.
    pub mascot: Option<String>,
    /// Preferred chaos level.
    pub chaos_level: ChaosLevel,
    /// Whether the quiz was completed.
    pub completed_quiz: bool,
}

impl UserProfile {
    /// Create a fresh profile (chaos 50, no quiz).
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a quiz result.
    pub fn set_archetype(&mut self, archetype: DecisionArchetype) {
        self.archetype = Some(archetype);
        self.mascot = Some(archetype.mascot().to_string());
        self.completed_quiz = true;
    }

    /// Set the chaos preference (clamped to 0-100).
    pub fn set_chaos_level(&mut self, chaos: u32) {
        self.chaos_level = ChaosLevel::new(chaos);
    }

    /// Back to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
