//! Application state for Vibepick.
//!
//! Wraps the stateless decision engine in an explicit [`AppState`]: the user
//! profile, current mood and chaos level, decision history, achievements,
//! plus the side games (personality quiz, would-you-rather, daily dilemma,
//! party rounds) and keyword-based option suggestions.

pub mod achievements;
pub mod config;
pub mod dilemma;
pub mod error;
pub mod history;
pub mod party;
pub mod profile;
pub mod quiz;
pub mod state;
pub mod suggest;
pub mod wyr;

pub use achievements::{Achievement, AchievementId, AchievementTracker};
pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use history::{DecisionHistory, HistoryEntry};
pub use party::{PartySession, Suggestion};
pub use profile::{DecisionArchetype, UserProfile};
pub use state::AppState;
