//! Decision history: a capped, newest-first log of past decisions.

pub mod entry;
pub mod log;

pub use entry::HistoryEntry;
pub use log::DecisionHistory;
