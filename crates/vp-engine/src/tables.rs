//! Flavor text tables.
//!
//! Each mode owns a message pool; "ai" and "party" also own an explanation
//! pool; every decision draws one meme reaction. The built-in pools can be
//! overridden from a JSON document:
//!
//! ```json
//! {
//!   "messages": { "sassy": ["Obviously.", "Was there ever a doubt?"] },
//!   "meme_reactions": ["W", "Certified classic"]
//! }
//! ```
//!
//! Pools missing from the document, or given as empty lists, keep their
//! defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::mode::Mode;
use crate::source::RandomSource;

/// Message used when the mode is not recognized.
pub const FALLBACK_MESSAGE: &str = "Here's your pick!";

/// Random mode messages.
pub const RANDOM_MESSAGES: &[&str] = &[
    "The RNG gods have spoken! 🎲",
    "Plot twist: The universe picked this! 🌌",
    "Random.exe has executed successfully! 💻",
    "Chaos chose chaos... and this! 🌪️",
    "The dice said 'yeet' and landed on this! 🎯",
];

/// AI mode messages.
pub const AI_MESSAGES: &[&str] = &[
    "My neural networks are vibing with this choice! 🤖🧠",
    "After calculating 42 million possibilities... this! 🔢",
    "Beep boop... optimal choice detected! 🤖✨",
    "My AI brain says: 'This one sparks joy!' 🎯",
    "Processing... Processing... EUREKA! This is it! 💡",
];

/// Logic mode messages.
pub const LOGIC_MESSAGES: &[&str] = &[
    "The data doesn't lie... unlike my ex! 📊💔",
    "Science says this is the move! 🔬",
    "Logic has entered the chat! 🧮",
    "Math is mathing perfectly here! ➕➖",
    "My spreadsheet is crying tears of joy! 📈😭",
];

/// Sassy mode messages.
pub const SASSY_MESSAGES: &[&str] = &[
    "Bestie, were you really gonna pick anything else? 💅",
    "Not me having to explain basic decisions! 🙄💖",
    "The audacity to doubt this choice! 😤✨",
    "Main character energy is choosing this! 🌟",
    "Sorry not sorry, but this is THE choice! 💋",
];

/// Reverse mode messages. The pick is the one to avoid.
pub const REVERSE_MESSAGES: &[&str] = &[
    "Whatever you do, do NOT pick this one... 🙃",
    "This is the choice to avoid. Obviously. Definitely. 👀",
    "Reverse psychology activated: stay far away from this! 🔄",
    "I would NEVER recommend this. (Wink.) 😉",
    "Absolutely not this one. Unless... 🤫",
];

/// Party mode messages.
pub const PARTY_MESSAGES: &[&str] = &[
    "The party has spoken! 🎉",
    "Squad consensus reached (nobody asked, everybody agreed)! 🥳",
    "DJ, drop the decision! 🎧",
    "Group chat is going OFF about this one! 📱🔥",
    "Confetti cannon says: THIS! 🎊",
];

/// AI mode explanations.
pub const AI_EXPLANATIONS: &[&str] = &[
    "I cross-referenced your vibes with 3 billion imaginary data points.",
    "My totally real neural network weighed snacks, sleep, and cosmic alignment.",
    "Sentiment analysis of the option text came back overwhelmingly positive.",
    "The training data (my feelings) strongly favored this outcome.",
];

/// Party mode explanations.
pub const PARTY_EXPLANATIONS: &[&str] = &[
    "Every imaginary guest voted, and this won by a landslide.",
    "The playlist shuffled to a banger the moment this option came up.",
    "It got the loudest cheer when the options were read aloud.",
    "Party rules: the option with the most hype wins. This had the most hype.",
];

/// Generic reactions drawn on every decision.
pub const MEME_REACTIONS: &[&str] = &[
    "This is the way! 🤌",
    "Big brain energy! 🧠✨",
    "Chef's kiss! 👨‍🍳💋",
    "It's giving main character vibes! 💅",
    "No cap, this is it! 🧢",
    "Periodt! 💯",
    "That's bussin! 🔥",
    "Living your best life! ✨",
    "Slay queen/king! 👑",
    "Touch grass? Nah, touch this decision! 🌱",
];

fn owned(pool: &[&str]) -> Vec<String> {
    pool.iter().map(|s| (*s).to_string()).collect()
}

/// Immutable flavor pools keyed by mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorTables {
    /// Message pool per mode.
    pub messages: BTreeMap<Mode, Vec<String>>,
    /// Explanation pool per explaining mode.
    pub explanations: BTreeMap<Mode, Vec<String>>,
    /// Reactions drawn for every decision.
    pub meme_reactions: Vec<String>,
    /// Message for unrecognized modes.
    pub fallback_message: String,
}

/// A partial table document. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FlavorOverrides {
    messages: BTreeMap<Mode, Vec<String>>,
    explanations: BTreeMap<Mode, Vec<String>>,
    meme_reactions: Vec<String>,
    fallback_message: Option<String>,
}

impl Default for FlavorTables {
    fn default() -> Self {
        let messages = BTreeMap::from([
            (Mode::Random, owned(RANDOM_MESSAGES)),
            (Mode::Ai, owned(AI_MESSAGES)),
            (Mode::Logic, owned(LOGIC_MESSAGES)),
            (Mode::Sassy, owned(SASSY_MESSAGES)),
            (Mode::Reverse, owned(REVERSE_MESSAGES)),
            (Mode::Party, owned(PARTY_MESSAGES)),
        ]);
        let explanations = BTreeMap::from([
            (Mode::Ai, owned(AI_EXPLANATIONS)),
            (Mode::Party, owned(PARTY_EXPLANATIONS)),
        ]);
        Self {
            messages,
            explanations,
            meme_reactions: owned(MEME_REACTIONS),
            fallback_message: FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl FlavorTables {
    /// Load tables from a JSON override document on top of the defaults.
    ///
    /// Empty pools in the document are ignored. Explanation pools are only
    /// accepted for modes that explain.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let overrides: FlavorOverrides =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidTables(e.to_string()))?;

        if let Some(mode) = overrides.explanations.keys().find(|m| !m.explains()) {
            return Err(EngineError::InvalidTables(format!(
                "mode '{mode}' does not use explanations"
            )));
        }

        let mut tables = Self::default();
        for (mode, pool) in overrides.messages {
            if !pool.is_empty() {
                tables.messages.insert(mode, pool);
            }
        }
        for (mode, pool) in overrides.explanations {
            if !pool.is_empty() {
                tables.explanations.insert(mode, pool);
            }
        }
        if !overrides.meme_reactions.is_empty() {
            tables.meme_reactions = overrides.meme_reactions;
        }
        if let Some(fallback) = overrides.fallback_message.filter(|s| !s.trim().is_empty()) {
            tables.fallback_message = fallback;
        }
        Ok(tables)
    }

    /// Message pool for `mode` (empty if none).
    pub fn messages_for(&self, mode: Mode) -> &[String] {
        self.messages.get(&mode).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Explanation pool for `mode` (empty for modes that don't explain).
    pub fn explanations_for(&self, mode: Mode) -> &[String] {
        self.explanations.get(&mode).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Draw a message for `mode`.
    pub fn random_message<'a, R: RandomSource>(&'a self, mode: Mode, rng: &mut R) -> &'a str {
        pick(self.messages_for(mode), rng)
    }

    /// Draw an explanation for `mode`, or "" if it has no pool.
    pub fn random_explanation<'a, R: RandomSource>(&'a self, mode: Mode, rng: &mut R) -> &'a str {
        pick(self.explanations_for(mode), rng)
    }

    /// Draw a meme reaction.
    pub fn random_meme<'a, R: RandomSource>(&'a self, rng: &mut R) -> &'a str {
        pick(&self.meme_reactions, rng)
    }
}

fn pick<'a, R: RandomSource>(pool: &'a [String], rng: &mut R) -> &'a str {
    if pool.is_empty() {
        ""
    } else {
        &pool[rng.pick_index(pool.len())]
    }
}
