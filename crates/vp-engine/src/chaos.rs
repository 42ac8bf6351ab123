//! Chaos level tracking.
//!
//! The chaos level (0-100) is a user-controlled knob. Past the engine's
//! threshold the option set is shuffled before the mode picks, which changes
//! which option counts as "first" for the deterministic modes.

use serde::{Deserialize, Serialize};

/// How chaotic the user wants their decisions, from 0 (saintly) to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChaosLevel {
    value: u8,
}

impl ChaosLevel {
    /// Create a chaos level, clamped to 0-100.
    pub fn new(value: u32) -> Self {
        Self {
            value: value.min(100) as u8,
        }
    }

    /// The current level.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Whether this level shuffles options under the given threshold.
    pub fn shuffles(&self, threshold: u8) -> bool {
        self.value > threshold
    }

    /// Slider label for this level.
    pub fn vibe(&self) -> &'static str {
        match self.value {
            0..=19 => "😇 Saint Mode",
            20..=39 => "😊 Playing it Safe",
            40..=59 => "🤔 Balanced Vibes",
            60..=79 => "😈 Spicy Choices",
            _ => "🌪️ Chaotic Evil",
        }
    }
}

impl Default for ChaosLevel {
    fn default() -> Self {
        Self::new(50)
    }
}

impl std::fmt::Display for ChaosLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
