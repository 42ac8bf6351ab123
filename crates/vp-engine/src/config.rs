//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Chaos level above which the option set is shuffled before selection.
pub const DEFAULT_CHAOS_THRESHOLD: u8 = 75;

/// Most options the input surface accepts.
pub const MAX_OPTIONS: usize = 6;

/// Fewest non-empty options a decision needs.
pub const MIN_OPTIONS: usize = 2;

/// Tunables for the decision engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Chaos values strictly above this shuffle the options (0-100).
    pub chaos_threshold: u8,
    /// Upper bound advertised to input surfaces. Not enforced by validation.
    pub max_options: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chaos_threshold: DEFAULT_CHAOS_THRESHOLD,
            max_options: MAX_OPTIONS,
        }
    }
}

impl EngineConfig {
    /// Set the chaos threshold (clamped to 0-100).
    pub fn with_chaos_threshold(mut self, threshold: u8) -> Self {
        self.chaos_threshold = threshold.min(100);
        self
    }

    /// Set the advertised option cap (never below [`MIN_OPTIONS`]).
    pub fn with_max_options(mut self, max: usize) -> Self {
        self.max_options = max.max(MIN_OPTIONS);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.chaos_threshold, 75);
        assert_eq!(cfg.max_options, 6);
    }

    #[test]
    fn builder_methods() {
        let cfg = EngineConfig::default()
            .with_chaos_threshold(50)
            .with_max_options(4);
        assert_eq!(cfg.chaos_threshold, 50);
        assert_eq!(cfg.max_options, 4);
    }

    #[test]
    fn builder_clamps() {
        let cfg = EngineConfig::default()
            .with_chaos_threshold(200)
            .with_max_options(0);
        assert_eq!(cfg.chaos_threshold, 100);
        assert_eq!(cfg.max_options, MIN_OPTIONS);
    }
}
