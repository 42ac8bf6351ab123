//! Party mode: friends take turns suggesting options, then the engine picks.

use serde::{Deserialize, Serialize};
use vp_engine::{DecisionRequest, Mode};

use crate::error::{SessionError, SessionResult};

/// Most players a party can seat.
pub const MAX_PLAYERS: usize = 6;
/// Fewest named players needed to start.
pub const MIN_PLAYERS: usize = 2;
/// Fewest suggestions needed to finish.
pub const MIN_SUGGESTIONS: usize = 2;

/// An option and who put it forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggesting player.
    pub player: String,
    /// The suggested option.
    pub option: String,
}

/// A running party. The first player is the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartySession {
    players: Vec<String>,
    current: usize,
    suggestions: Vec<Suggestion>,
    context: String,
}

impl PartySession {
    /// Start a party. Blank names are dropped before counting.
    pub fn start<I, S>(names: I, context: impl Into<String>) -> SessionResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let players: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        if players.len() < MIN_PLAYERS {
            return Err(SessionError::InvalidChoice(format!(
                "party needs at least {MIN_PLAYERS} named players, got {}",
                players.len()
            )));
        }
        if players.len() > MAX_PLAYERS {
            return Err(SessionError::InvalidChoice(format!(
                "party seats at most {MAX_PLAYERS} players, got {}",
                players.len()
            )));
        }
        Ok(Self {
            players,
            current: 0,
            suggestions: Vec::new(),
            context: context.into(),
        })
    }

    /// Players in turn order.
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Whose turn it is.
    pub fn current_player(&self) -> &str {
        &self.players[self.current]
    }

    /// What the party is deciding.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Suggestions so far, in turn order.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Record the current player's suggestion and pass the turn on.
    pub fn suggest(&mut self, option: &str) -> SessionResult<&Suggestion> {
        let option = option.trim();
        if option.is_empty() {
            return Err(SessionError::InvalidChoice(
                "suggestion cannot be empty".to_string(),
            ));
        }
        let player = self.players[self.current].clone();
        self.current = (self.current + 1) % self.players.len();
        self.suggestions.push(Suggestion {
            player,
            option: option.to_string(),
        });
        let idx = self.suggestions.len() - 1;
        Ok(&self.suggestions[idx])
    }

    /// Whether enough suggestions are in to decide.
    pub fn can_finish(&self) -> bool {
        self.suggestions.len() >= MIN_SUGGESTIONS
    }

    /// Turn the suggestions into a party-mode request.
    pub fn finish(&self) -> SessionResult<DecisionRequest> {
        if !self.can_finish() {
            return Err(SessionError::InvalidChoice(format!(
                "need at least {MIN_SUGGESTIONS} suggestions, got {}",
                self.suggestions.len()
            )));
        }
        Ok(
            DecisionRequest::new(self.suggestions.iter().map(|s| s.option.clone()))
                .with_mode_spec(Mode::Party)
                .with_context(self.context.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vp_engine::ModeSpec;

    fn party() -> PartySession {
        PartySession::start(["Ana", "  ", "Ben", "Cleo"], "Movie night").unwrap()
    }

    #[test]
    fn blank_names_dropped() {
        let p = party();
        assert_eq!(p.players(), ["Ana", "Ben", "Cleo"]);
        assert_eq!(p.current_player(), "Ana");
        assert_eq!(p.context(), "Movie night");
    }

    #[test]
    fn needs_two_named_players() {
        let err = PartySession::start(["Ana", "", " "], "").unwrap_err();
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn at_most_six_players() {
        let names = ["a", "b", "c", "d", "e", "f", "g"];
        assert!(PartySession::start(names, "").is_err());
        assert!(PartySession::start(&names[..6], "").is_ok());
    }

    #[test]
    fn turns_rotate() {
        let mut p = party();
        assert_eq!(p.suggest("Dune").unwrap().player, "Ana");
        assert_eq!(p.current_player(), "Ben");
        p.suggest("Heat").unwrap();
        p.suggest("Up").unwrap();
        assert_eq!(p.current_player(), "Ana");
        assert_eq!(p.suggestions()[2].player, "Cleo");
    }

    #[test]
    fn empty_suggestion_keeps_turn() {
        let mut p = party();
        assert!(p.suggest("   ").is_err());
        assert_eq!(p.current_player(), "Ana");
        assert!(p.suggestions().is_empty());
    }

    #[test]
    fn finish_needs_two_suggestions() {
        let mut p = party();
        p.suggest("Dune").unwrap();
        assert!(!p.can_finish());
        assert!(p.finish().is_err());
        p.suggest(" Heat ").unwrap();
        let req = p.finish().unwrap();
        assert_eq!(req.options, vec!["Dune", "Heat"]);
        assert_eq!(req.mode, ModeSpec::Known(Mode::Party));
        assert_eq!(req.context, "Movie night");
    }
}
