//! The decision pipeline.
//!
//! A request moves through `Validating -> Resolving -> ModifierApplied ->
//! Assembled`, or stops at `Rejected` when validation fails. Nothing carries
//! over between requests: [`Engine`] only holds immutable tables and config.

use serde::{Deserialize, Serialize};

use crate::chaos::ChaosLevel;
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::modifier::{apply_chaos, apply_mood};
use crate::mode::ModeSpec;
use crate::mood::Mood;
use crate::options::OptionSet;
use crate::resolver::resolve;
use crate::result::{DecisionResult, ResultMeta, assemble};
use crate::source::RandomSource;
use crate::tables::FlavorTables;

/// Pipeline stage of a single decision request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// No request in flight.
    Idle,
    /// Checking the option set.
    Validating,
    /// Picking an option and drawing flavor text.
    Resolving,
    /// Mood wrapping applied.
    ModifierApplied,
    /// Result built.
    Assembled,
    /// Validation failed; no result.
    Rejected,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Validating => write!(f, "validating"),
            Self::Resolving => write!(f, "resolving"),
            Self::ModifierApplied => write!(f, "modifier-applied"),
            Self::Assembled => write!(f, "assembled"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// Everything a decision needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// Raw options, unvalidated.
    pub options: Vec<String>,
    /// Requested mode.
    pub mode: ModeSpec,
    /// Optional mood.
    pub mood: Option<Mood>,
    /// Chaos level.
    pub chaos: ChaosLevel,
    /// Free-text context.
    pub context: String,
}

impl DecisionRequest {
    /// A request in `random` mode with chaos 0 and no mood.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            mode: ModeSpec::Known(crate::mode::Mode::Random),
            mood: None,
            chaos: ChaosLevel::new(0),
            context: String::new(),
        }
    }

    /// Set the mode from a string. Unknown strings are kept for fallback.
    pub fn with_mode(mut self, mode: &str) -> Self {
        self.mode = ModeSpec::parse(mode);
        self
    }

    /// Set an already-classified mode.
    pub fn with_mode_spec(mut self, mode: impl Into<ModeSpec>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Set or clear the mood.
    pub fn with_mood(mut self, mood: Option<Mood>) -> Self {
        self.mood = mood;
        self
    }

    /// Set the chaos level (clamped to 0-100).
    pub fn with_chaos(mut self, chaos: u32) -> Self {
        self.chaos = ChaosLevel::new(chaos);
        self
    }

    /// Set the context line.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }
}

/// Stateless decision engine: config plus flavor tables.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
    tables: FlavorTables,
}

impl Engine {
    /// Create an engine with the given config and tables.
    pub fn new(config: EngineConfig, tables: FlavorTables) -> Self {
        Self { config, tables }
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The flavor tables.
    pub fn tables(&self) -> &FlavorTables {
        &self.tables
    }

    /// Run a decision.
    pub fn decide<R: RandomSource>(
        &self,
        request: &DecisionRequest,
        rng: &mut R,
    ) -> EngineResult<DecisionResult> {
        self.decide_observed(request, rng, |stage| {
            tracing::debug!(target: "vp_engine", %stage, "decision stage");
        })
    }

    /// Run a decision, reporting every stage transition to `observe`.
    ///
    /// The observer sees `Validating` first and `Idle` last, with either
    /// `Rejected` or the full success path in between.
    pub fn decide_observed<R, F>(
        &self,
        request: &DecisionRequest,
        rng: &mut R,
        mut observe: F,
    ) -> EngineResult<DecisionResult>
    where
        R: RandomSource,
        F: FnMut(Stage),
    {
        observe(Stage::Validating);
        let mut options = match OptionSet::validate(&request.options) {
            Ok(options) => options,
            Err(e) => {
                tracing::warn!(target: "vp_engine", error = %e, "decision rejected");
                observe(Stage::Rejected);
                observe(Stage::Idle);
                return Err(e);
            }
        };

        observe(Stage::Resolving);
        let shuffled = apply_chaos(
            &mut options,
            request.chaos,
            self.config.chaos_threshold,
            rng,
        );
        let mut resolution = resolve(&request.mode, &options, &self.tables, rng);

        let (message, explanation) =
            apply_mood(request.mood, &resolution.message, &resolution.explanation);
        resolution.message = message;
        resolution.explanation = explanation;
        observe(Stage::ModifierApplied);

        let meta = ResultMeta {
            mode: request.mode.clone(),
            mood: request.mood,
            context: request.context.clone(),
            shuffled,
        };
        let result = assemble(&options, resolution, meta);
        if result.is_ok() {
            observe(Stage::Assembled);
        }
        observe(Stage::Idle);
        result
    }
}

/// Run one decision with the default configuration and the given tables.
pub fn decide<R: RandomSource>(
    request: &DecisionRequest,
    tables: &FlavorTables,
    rng: &mut R,
) -> EngineResult<DecisionResult> {
    Engine::new(EngineConfig::default(), tables.clone()).decide(request, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::mode::Mode;
    use crate::source::ScriptedSource;
    use crate::tables::FALLBACK_MESSAGE;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn logic_low_chaos_picks_first() {
        let engine = Engine::default();
        let req = DecisionRequest::new(["Pizza", "Tacos", "Sushi"])
            .with_mode("logic")
            .with_chaos(10);
        let mut rng = StdRng::seed_from_u64(42);
        let result = engine.decide(&req, &mut rng).unwrap();
        assert_eq!(result.selected_option, "Pizza");
        assert!(!result.shuffled);
    }

    #[test]
    fn reverse_high_chaos_picks_first_of_shuffled() {
        let engine = Engine::default();
        let req = DecisionRequest::new(["A", "B"])
            .with_mode("reverse")
            .with_chaos(90);
        let mut src = ScriptedSource::new().with_permutation([1, 0]);
        let result = engine.decide(&req, &mut src).unwrap();
        assert_eq!(result.selected_option, "B");
        assert_eq!(result.options, vec!["B", "A"]);
        assert!(result.shuffled);
    }

    #[test]
    fn single_option_is_rejected() {
        let engine = Engine::default();
        let req = DecisionRequest::new(["X"]).with_mode("random");
        let mut rng = StdRng::seed_from_u64(42);
        let err = engine.decide(&req, &mut rng).unwrap_err();
        assert_eq!(err, EngineError::InsufficientOptions { found: 1 });
    }

    #[test]
    fn rejection_draws_nothing() {
        let engine = Engine::default();
        let req = DecisionRequest::new(["X", ""]).with_chaos(100);
        let mut src = ScriptedSource::new();
        assert!(engine.decide(&req, &mut src).is_err());
        assert_eq!(src.index_calls(), 0);
        assert_eq!(src.shuffle_calls(), 0);
    }

    #[test]
    fn banana_mode_falls_back() {
        let engine = Engine::default();
        let req = DecisionRequest::new(["One", "Two"]).with_mode("banana");
        let mut rng = StdRng::seed_from_u64(42);
        let result = engine.decide(&req, &mut rng).unwrap();
        assert_eq!(result.selected_option, "One");
        assert_eq!(result.message, FALLBACK_MESSAGE);
        assert_eq!(result.mode, ModeSpec::Unknown("banana".to_string()));
    }

    #[test]
    fn mood_wraps_final_message() {
        let engine = Engine::default();
        let req = DecisionRequest::new(["One", "Two"])
            .with_mode("banana")
            .with_mood(Some(Mood::Productivity));
        let mut rng = StdRng::seed_from_u64(42);
        let result = engine.decide(&req, &mut rng).unwrap();
        assert_eq!(result.message, Mood::Productivity.wrap(FALLBACK_MESSAGE));
    }

    #[test]
    fn context_carried_through() {
        let engine = Engine::default();
        let req = DecisionRequest::new(["One", "Two"]).with_context("What to study first");
        let mut rng = StdRng::seed_from_u64(42);
        let result = engine.decide(&req, &mut rng).unwrap();
        assert_eq!(result.context, "What to study first");
    }

    #[test]
    fn stages_on_success() {
        let engine = Engine::default();
        let req = DecisionRequest::new(["One", "Two"]).with_mode_spec(Mode::Sassy);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = Vec::new();
        engine
            .decide_observed(&req, &mut rng, |s| seen.push(s))
            .unwrap();
        assert_eq!(
            seen,
            vec![
                Stage::Validating,
                Stage::Resolving,
                Stage::ModifierApplied,
                Stage::Assembled,
                Stage::Idle,
            ]
        );
    }

    #[test]
    fn stages_on_rejection() {
        let engine = Engine::default();
        let req = DecisionRequest::new(["lonely"]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = Vec::new();
        let _ = engine.decide_observed(&req, &mut rng, |s| seen.push(s));
        assert_eq!(seen, vec![Stage::Validating, Stage::Rejected, Stage::Idle]);
    }

    #[test]
    fn free_decide_uses_given_tables() {
        let tables =
            FlavorTables::from_json(r#"{"messages": {"logic": ["Spreadsheet says so."]}}"#)
                .unwrap();
        let req = DecisionRequest::new(["Pizza", "Tacos"]).with_mode("logic");
        let result = decide(&req, &tables, &mut ScriptedSource::new()).unwrap();
        assert_eq!(result.selected_option, "Pizza");
        assert_eq!(result.message, "Spreadsheet says so.");

        let err = decide(&DecisionRequest::new(["solo"]), &tables, &mut ScriptedSource::new());
        assert_eq!(err, Err(EngineError::InsufficientOptions { found: 1 }));
    }

    #[test]
    fn custom_threshold_moves_the_shuffle_point() {
        let engine = Engine::new(
            EngineConfig::default().with_chaos_threshold(20),
            FlavorTables::default(),
        );
        let req = DecisionRequest::new(["A", "B"]).with_mode("logic").with_chaos(30);
        let mut src = ScriptedSource::new().with_permutation([1, 0]);
        let result = engine.decide(&req, &mut src).unwrap();
        assert!(result.shuffled);
        assert_eq!(result.selected_option, "B");
    }
}
