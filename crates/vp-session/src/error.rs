//! Error types for the session layer.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while driving a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The decision engine rejected the request.
    #[error("{0}")]
    Engine(#[from] vp_engine::EngineError),

    /// "Decide again" with no earlier decision.
    #[error("nothing to decide again yet")]
    NothingToRepeat,

    /// No history entry at the given position.
    #[error("no history entry #{0}")]
    HistoryNotFound(usize),

    /// Invalid choice or input.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// A quiz answer outside A-D.
    #[error("invalid quiz answer '{0}', expected A, B, C or D")]
    InvalidAnswer(char),

    /// Unknown command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// History export failed.
    #[error("export failed: {0}")]
    Export(String),
}
