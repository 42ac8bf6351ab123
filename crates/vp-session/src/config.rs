//! Configuration for an application session.

use vp_engine::EngineConfig;

/// How many decisions the history keeps by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible decisions. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Maximum number of history entries kept.
    pub history_limit: usize,
    /// Initial chaos level (0-100).
    pub initial_chaos: u32,
    /// Engine tunables.
    pub engine: EngineConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            initial_chaos: 50,
            engine: EngineConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the history limit (at least 1).
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self
    }

    /// Set the initial chaos level (clamped to 0-100).
    pub fn with_chaos(mut self, chaos: u32) -> Self {
        self.initial_chaos = chaos.min(100);
        self
    }

    /// Set the engine configuration.
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.history_limit, 50);
        assert_eq!(cfg.initial_chaos, 50);
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_seed(123)
            .with_history_limit(10)
            .with_chaos(80);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.history_limit, 10);
        assert_eq!(cfg.initial_chaos, 80);
    }

    #[test]
    fn values_clamped() {
        let cfg = SessionConfig::default().with_history_limit(0).with_chaos(500);
        assert_eq!(cfg.history_limit, 1);
        assert_eq!(cfg.initial_chaos, 100);
    }
}
