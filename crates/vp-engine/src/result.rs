//! Decision results and the record handed to history keepers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::mode::ModeSpec;
use crate::mood::Mood;
use crate::options::OptionSet;
use crate::resolver::Resolution;

/// A finished decision, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResult {
    /// The chosen option, always one of `options`.
    pub selected_option: String,
    /// Position of the choice within `options`.
    pub selected_index: usize,
    /// Themed message, mood wrapping included.
    pub message: String,
    /// Meme reaction.
    pub meme_reaction: String,
    /// Explanation, possibly empty.
    pub explanation: String,
    /// The mode that was requested.
    pub mode: ModeSpec,
    /// Mood applied, if any.
    pub mood: Option<Mood>,
    /// Free-text context, carried through untouched.
    pub context: String,
    /// Options in the order the mode saw them.
    pub options: Vec<String>,
    /// Whether the chaos shuffle reordered the options.
    pub shuffled: bool,
}

/// The tuple a history collaborator persists for each decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Options as the mode saw them.
    pub options: Vec<String>,
    /// Free-text context.
    pub context: String,
    /// The chosen option.
    pub selected_option: String,
    /// Position of the choice within `options`.
    pub selected_index: usize,
    /// Mode identifier (raw string for unknown modes).
    pub mode: String,
    /// Mood, if any.
    pub mood: Option<Mood>,
    /// When the decision was made.
    pub timestamp: DateTime<Utc>,
}

impl DecisionResult {
    /// Build the history tuple for this decision.
    pub fn history_record(&self, timestamp: DateTime<Utc>) -> HistoryRecord {
        HistoryRecord {
            options: self.options.clone(),
            context: self.context.clone(),
            selected_option: self.selected_option.clone(),
            selected_index: self.selected_index,
            mode: self.mode.to_string(),
            mood: self.mood,
            timestamp,
        }
    }
}

impl std::fmt::Display for DecisionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {} Says...", self.mode.emoji(), self.mode.title())?;
        writeln!(f, "  {}", self.selected_option)?;
        writeln!(f, "  {}", self.message)?;
        write!(f, "  {}", self.meme_reaction)?;
        if !self.explanation.is_empty() {
            write!(f, "\n  Explanation: {}", self.explanation)?;
        }
        Ok(())
    }
}

/// The request fields the assembler copies into the result.
#[derive(Debug, Clone)]
pub struct ResultMeta {
    /// Requested mode.
    pub mode: ModeSpec,
    /// Applied mood.
    pub mood: Option<Mood>,
    /// Free-text context.
    pub context: String,
    /// Whether the chaos shuffle ran.
    pub shuffled: bool,
}

/// Build the final result. Draws nothing; only checks and copies.
///
/// Fails with [`EngineError::SelectionOutOfSet`] if the resolution names an
/// option that is not at its index in `options`.
pub fn assemble(
    options: &OptionSet,
    resolution: Resolution,
    meta: ResultMeta,
) -> EngineResult<DecisionResult> {
    if options.get(resolution.selected_index) != Some(resolution.selected_option.as_str()) {
        return Err(EngineError::SelectionOutOfSet(resolution.selected_option));
    }

    Ok(DecisionResult {
        selected_option: resolution.selected_option,
        selected_index: resolution.selected_index,
        message: resolution.message,
        meme_reaction: resolution.meme_reaction,
        explanation: resolution.explanation,
        mode: meta.mode,
        mood: meta.mood,
        context: meta.context,
        options: options.as_slice().to_vec(),
        shuffled: meta.shuffled,
    })
}
