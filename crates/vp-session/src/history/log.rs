//! History storage and export.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vp_engine::HistoryRecord;

use super::entry::HistoryEntry;
use crate::config::DEFAULT_HISTORY_LIMIT;
use crate::error::{SessionError, SessionResult};

/// Past decisions, newest first, capped at `limit` entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionHistory {
    entries: Vec<HistoryEntry>,
    limit: usize,
}

impl Default for DecisionHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl DecisionHistory {
    /// Create an empty history with the default limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history keeping at most `limit` entries.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Record a decision at the front. The oldest entry falls off past the limit.
    pub fn record(&mut self, record: HistoryRecord) -> Uuid {
        let entry = HistoryEntry::from(record);
        let id = entry.id;
        self.entries.insert(0, entry);
        self.entries.truncate(self.limit);
        id
    }

    /// Flag a decision as regretted. Returns false if the id is unknown.
    pub fn mark_regretted(&mut self, id: Uuid) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.regretted = true;
                true
            }
            None => false,
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entry by 1-based position (1 = newest).
    pub fn nth(&self, position: usize) -> Option<&HistoryEntry> {
        position.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// How many entries used `mode`.
    pub fn mode_count(&self, mode: &str) -> usize {
        self.entries.iter().filter(|e| e.mode == mode).count()
    }

    /// How many entries are marked regretted.
    pub fn regret_count(&self) -> usize {
        self.entries.iter().filter(|e| e.regretted).count()
    }

    /// Export the history as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Decision History\n\n");
        for entry in &self.entries {
            let title = if entry.context.is_empty() {
                "Decision"
            } else {
                entry.context.as_str()
            };
            out.push_str(&format!(
                "## {title}\n\n*{}* · mode **{}**",
                entry.timestamp.format("%Y-%m-%d %H:%M"),
                entry.mode
            ));
            if let Some(mood) = entry.mood {
                out.push_str(&format!(" · mood **{mood}**"));
            }
            out.push_str("\n\n");
            for (i, option) in entry.options.iter().enumerate() {
                if i == entry.selected_index {
                    out.push_str(&format!("- **{option}** ✅\n"));
                } else {
                    out.push_str(&format!("- {option}\n"));
                }
            }
            if entry.regretted {
                out.push_str("\n> Regretted this one.\n");
            }
            out.push('\n');
        }
        out
    }

    /// Export the history as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Decision History\n================\n\n");
        for (i, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} -> {} [{}]",
                i + 1,
                entry.options.join(" / "),
                entry.selected_option,
                entry.mode
            ));
            if entry.regretted {
                out.push_str(" (regretted)");
            }
            out.push('\n');
            if !entry.context.is_empty() {
                out.push_str(&format!("   {}\n", entry.context));
            }
        }
        out
    }

    /// Export the history as pretty-printed JSON.
    pub fn export_json(&self) -> SessionResult<String> {
        serde_json::to_string_pretty(&self.entries).map_err(|e| SessionError::Export(e.to_string()))
    }
}
