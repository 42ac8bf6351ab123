//! Decision modes.
//!
//! A mode decides two things: which option gets picked and which pool of
//! flavor text frames it. The "ai" and "logic" names are cosmetic; nothing
//! here scores options.

use serde::{Deserialize, Serialize};

/// Title shown for an unrecognized mode.
pub const FALLBACK_TITLE: &str = "Decision";

/// A named decision strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Uniform random pick.
    Random,
    /// Uniform random pick with robot flavor and an explanation.
    Ai,
    /// Always the first option.
    Logic,
    /// Uniform random pick, delivered with attitude.
    Sassy,
    /// Always the first option, framed as the one to avoid.
    Reverse,
    /// Uniform random pick with party flavor and an explanation.
    Party,
}

/// How a mode chooses its option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRule {
    /// Any option, uniformly at random.
    Uniform,
    /// Index 0 of the (possibly shuffled) option set.
    First,
}

impl Mode {
    /// Parse a mode name, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "random" => Some(Self::Random),
            "ai" => Some(Self::Ai),
            "logic" => Some(Self::Logic),
            "sassy" => Some(Self::Sassy),
            "reverse" => Some(Self::Reverse),
            "party" => Some(Self::Party),
            _ => None,
        }
    }

    /// All modes in menu order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Random,
            Self::Ai,
            Self::Logic,
            Self::Sassy,
            Self::Reverse,
            Self::Party,
        ]
    }

    /// The selection rule this mode uses.
    pub fn selection_rule(self) -> SelectionRule {
        match self {
            Self::Random | Self::Ai | Self::Sassy | Self::Party => SelectionRule::Uniform,
            Self::Logic | Self::Reverse => SelectionRule::First,
        }
    }

    /// Whether this mode always produces an explanation.
    pub fn explains(self) -> bool {
        matches!(self, Self::Ai | Self::Party)
    }

    /// Lowercase identifier, as accepted by [`Mode::parse`].
    pub fn id(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Ai => "ai",
            Self::Logic => "logic",
            Self::Sassy => "sassy",
            Self::Reverse => "reverse",
            Self::Party => "party",
        }
    }

    /// Display title for result headers.
    pub fn title(self) -> &'static str {
        match self {
            Self::Random => "Random Pick",
            Self::Ai => "AI Assistant",
            Self::Logic => "Logic Mode",
            Self::Sassy => "Sassy Mode",
            Self::Reverse => "Reverse Psychology",
            Self::Party => "Party Mode",
        }
    }

    /// Badge emoji.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Random => "🎲",
            Self::Ai => "🤖",
            Self::Logic => "📊",
            Self::Sassy => "😂",
            Self::Reverse => "🙃",
            Self::Party => "🎉",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A requested mode: either a known one or the raw string that did not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeSpec {
    /// A recognized mode.
    Known(Mode),
    /// Anything else. Resolves with the default rule.
    Unknown(String),
}

impl ModeSpec {
    /// Classify a mode string. Never fails.
    pub fn parse(s: &str) -> Self {
        match Mode::parse(s) {
            Some(mode) => Self::Known(mode),
            None => Self::Unknown(s.trim().to_string()),
        }
    }

    /// The known mode, if any.
    pub fn mode(&self) -> Option<Mode> {
        match self {
            Self::Known(mode) => Some(*mode),
            Self::Unknown(_) => None,
        }
    }

    /// Display title, with the generic fallback for unknown modes.
    pub fn title(&self) -> &'static str {
        self.mode().map_or(FALLBACK_TITLE, Mode::title)
    }

    /// Badge emoji, with a sparkle for unknown modes.
    pub fn emoji(&self) -> &'static str {
        self.mode().map_or("✨", Mode::emoji)
    }
}

impl From<Mode> for ModeSpec {
    fn from(mode: Mode) -> Self {
        Self::Known(mode)
    }
}

impl std::fmt::Display for ModeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Known(mode) => write!(f, "{mode}"),
            Self::Unknown(raw) => write!(f, "{raw}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_modes() {
        for mode in Mode::all() {
            assert_eq!(Mode::parse(mode.id()), Some(*mode));
        }
        assert_eq!(Mode::parse("  LOGIC "), Some(Mode::Logic));
        assert_eq!(Mode::parse("Party"), Some(Mode::Party));
    }

    #[test]
    fn parse_unknown_mode() {
        assert_eq!(Mode::parse("banana"), None);
        assert_eq!(Mode::parse(""), None);
    }

    #[test]
    fn selection_rules() {
        assert_eq!(Mode::Random.selection_rule(), SelectionRule::Uniform);
        assert_eq!(Mode::Ai.selection_rule(), SelectionRule::Uniform);
        assert_eq!(Mode::Sassy.selection_rule(), SelectionRule::Uniform);
        assert_eq!(Mode::Party.selection_rule(), SelectionRule::Uniform);
        assert_eq!(Mode::Logic.selection_rule(), SelectionRule::First);
        assert_eq!(Mode::Reverse.selection_rule(), SelectionRule::First);
    }

    #[test]
    fn only_ai_and_party_explain() {
        let explaining: Vec<Mode> = Mode::all().iter().copied().filter(|m| m.explains()).collect();
        assert_eq!(explaining, vec![Mode::Ai, Mode::Party]);
    }

    #[test]
    fn spec_parse_falls_back() {
        assert_eq!(ModeSpec::parse("sassy"), ModeSpec::Known(Mode::Sassy));
        let spec = ModeSpec::parse(" banana ");
        assert_eq!(spec, ModeSpec::Unknown("banana".to_string()));
        assert_eq!(spec.mode(), None);
        assert_eq!(spec.title(), "Decision");
        assert_eq!(spec.emoji(), "✨");
        assert_eq!(spec.to_string(), "banana");
    }

    #[test]
    fn titles_and_display() {
        assert_eq!(Mode::Reverse.title(), "Reverse Psychology");
        assert_eq!(Mode::Ai.to_string(), "ai");
        assert_eq!(ModeSpec::from(Mode::Party).title(), "Party Mode");
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&Mode::Reverse).unwrap();
        assert_eq!(json, "\"reverse\"");
        let mode: Mode = serde_json::from_str("\"ai\"").unwrap();
        assert_eq!(mode, Mode::Ai);
    }
}
