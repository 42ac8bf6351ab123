//! History entry type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vp_engine::{HistoryRecord, Mood};

/// One past decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique id.
    pub id: Uuid,
    /// Options in the order the mode saw them.
    pub options: Vec<String>,
    /// Free-text context.
    pub context: String,
    /// What was picked.
    pub selected_option: String,
    /// Position of the pick within `options`.
    #[serde(default)]
    pub selected_index: usize,
    /// Mode identifier.
    pub mode: String,
    /// Mood at the time, if any.
    pub mood: Option<Mood>,
    /// When the decision was made.
    pub timestamp: DateTime<Utc>,
    /// Whether the user later regretted it.
    #[serde(default)]
    pub regretted: bool,
}

impl From<HistoryRecord> for HistoryEntry {
    fn from(record: HistoryRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            options: record.options,
            context: record.context,
            selected_option: record.selected_option,
            selected_index: record.selected_index,
            mode: record.mode,
            mood: record.mood,
            timestamp: record.timestamp,
            regretted: false,
        }
    }
}
