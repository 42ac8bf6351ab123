//! Option set validation.

use serde::{Deserialize, Serialize};

use crate::config::MIN_OPTIONS;
use crate::error::{EngineError, EngineResult};

/// A validated, ordered list of candidate choices.
///
/// Holds at least two non-empty, trimmed strings. Duplicates are kept and
/// count as distinct entries by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    options: Vec<String>,
}

impl OptionSet {
    /// Trim every option, drop the empty ones, and require at least two.
    pub fn validate<I, S>(options: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let options: Vec<String> = options
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if options.len() < MIN_OPTIONS {
            return Err(EngineError::InsufficientOptions {
                found: options.len(),
            });
        }
        Ok(Self { options })
    }

    /// The options in their current order.
    pub fn as_slice(&self) -> &[String] {
        &self.options
    }

    /// Number of options (always >= 2).
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Option at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// The first option. Deterministic modes pick this one.
    pub fn first(&self) -> &str {
        // Validation guarantees at least two entries.
        &self.options[0]
    }

    /// Whether `option` is one of the entries.
    pub fn contains(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Iterate over the options.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(String::as_str)
    }

    /// Consume the set, returning the options.
    pub fn into_vec(self) -> Vec<String> {
        self.options
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [String] {
        &mut self.options
    }
}
