//! Error types for the decision engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while resolving a decision.
///
/// An unrecognized mode is deliberately absent: it degrades to the default
/// selection rule instead of failing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Fewer than two non-empty options were supplied.
    #[error("need at least 2 options, got {found}")]
    InsufficientOptions {
        /// How many non-empty options remained after trimming.
        found: usize,
    },

    /// The assembler was handed a selection that is not in the option set.
    #[error("selected option '{0}' is not one of the supplied options")]
    SelectionOutOfSet(String),

    /// A flavor table document could not be parsed.
    #[error("invalid flavor tables: {0}")]
    InvalidTables(String),
}
