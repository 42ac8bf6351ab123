//! Moods: cosmetic wrappers around the chosen message.

use serde::{Deserialize, Serialize};

/// The user's current vibe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Embrace the chaos.
    Chaotic,
    /// Taking it easy.
    Chill,
    /// Getting stuff done.
    Productivity,
    /// Main character energy.
    Sassy,
    /// Facts over feelings.
    Logical,
}

/// The fixed wrapping a mood applies to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodTemplate {
    /// Text placed before the message.
    pub prefix: &'static str,
    /// Text placed after the message.
    pub suffix: &'static str,
}

/// Explanation the logical mood supplies when the mode gave none.
pub const LOGICAL_EXPLANATION: &str =
    "Facts over feelings: every option was weighed, and this one cleared the bar first.";

impl Mood {
    /// Parse a mood name, ignoring case. Accepts "productive" for productivity.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "chaotic" => Some(Self::Chaotic),
            "chill" => Some(Self::Chill),
            "productivity" | "productive" => Some(Self::Productivity),
            "sassy" => Some(Self::Sassy),
            "logical" => Some(Self::Logical),
            _ => None,
        }
    }

    /// All moods in selector order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Chaotic,
            Self::Chill,
            Self::Productivity,
            Self::Sassy,
            Self::Logical,
        ]
    }

    /// Lowercase identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Chaotic => "chaotic",
            Self::Chill => "chill",
            Self::Productivity => "productivity",
            Self::Sassy => "sassy",
            Self::Logical => "logical",
        }
    }

    /// Selector emoji.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Chaotic => "🌪️",
            Self::Chill => "😌",
            Self::Productivity => "💪",
            Self::Sassy => "💅",
            Self::Logical => "🤓",
        }
    }

    /// Selector tagline.
    pub fn description(self) -> &'static str {
        match self {
            Self::Chaotic => "Embrace the chaos, bestie!",
            Self::Chill => "Taking it easy today",
            Self::Productivity => "Getting stuff done!",
            Self::Sassy => "Main character energy",
            Self::Logical => "Facts over feelings",
        }
    }

    /// This mood's one wrapping template.
    pub fn template(self) -> MoodTemplate {
        match self {
            Self::Chaotic => MoodTemplate {
                prefix: "🌪️ Chaos approved: ",
                suffix: " Let it ride!",
            },
            Self::Chill => MoodTemplate {
                prefix: "😌 No pressure, but... ",
                suffix: " Deep breaths, you got this.",
            },
            Self::Productivity => MoodTemplate {
                prefix: "💪 ",
                suffix: " Now go get stuff done!",
            },
            Self::Sassy => MoodTemplate {
                prefix: "💅 ",
                suffix: " And honestly? Iconic.",
            },
            Self::Logical => MoodTemplate {
                prefix: "🤓 Facts over feelings: ",
                suffix: "",
            },
        }
    }

    /// Wrap `message` in this mood's template.
    pub fn wrap(self, message: &str) -> String {
        let t = self.template();
        format!("{}{message}{}", t.prefix, t.suffix)
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_moods() {
        for mood in Mood::all() {
            assert_eq!(Mood::parse(mood.id()), Some(*mood));
        }
        assert_eq!(Mood::parse("Productive"), Some(Mood::Productivity));
        assert_eq!(Mood::parse("grumpy"), None);
    }

    #[test]
    fn wrap_keeps_message_intact() {
        for mood in Mood::all() {
            let wrapped = mood.wrap("Pick it!");
            assert!(wrapped.contains("Pick it!"), "{mood}: {wrapped}");
            assert_ne!(wrapped, "Pick it!");
        }
    }

    #[test]
    fn wrap_is_fixed_per_mood() {
        assert_eq!(Mood::Productivity.wrap("Go."), "💪 Go. Now go get stuff done!");
        assert_eq!(Mood::Logical.wrap("Go."), "🤓 Facts over feelings: Go.");
        assert_eq!(Mood::Sassy.wrap("Go."), Mood::Sassy.wrap("Go."));
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&Mood::Chill).unwrap();
        assert_eq!(json, "\"chill\"");
        let mood: Mood = serde_json::from_str(&json).unwrap();
        assert_eq!(mood, Mood::Chill);
    }
}
