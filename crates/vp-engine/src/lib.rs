//! Decision resolution engine for Vibepick.
//!
//! Validates an option set, applies the chaos shuffle, resolves a decision
//! mode to a selection rule and a themed message, wraps the message in the
//! user's mood, and assembles the final [`DecisionResult`]. All randomness
//! flows through a single [`RandomSource`] so callers can inject a
//! deterministic one.

pub mod chaos;
pub mod config;
pub mod engine;
pub mod error;
pub mod modifier;
pub mod mode;
pub mod mood;
pub mod options;
pub mod resolver;
pub mod result;
pub mod source;
pub mod tables;

pub use chaos::ChaosLevel;
pub use config::EngineConfig;
pub use engine::{DecisionRequest, Engine, Stage, decide};
pub use error::{EngineError, EngineResult};
pub use mode::{Mode, ModeSpec};
pub use mood::Mood;
pub use options::OptionSet;
pub use result::{DecisionResult, HistoryRecord};
pub use source::{RandomSource, ScriptedSource};
pub use tables::FlavorTables;
