//! Modifiers: the chaos shuffle before resolution and the mood wrap after.

use crate::chaos::ChaosLevel;
use crate::mood::{LOGICAL_EXPLANATION, Mood};
use crate::options::OptionSet;
use crate::source::RandomSource;

/// Shuffle `options` in place when `chaos` exceeds `threshold`.
///
/// Returns whether a shuffle was applied. Only the order changes; no option
/// is added, dropped or edited.
pub fn apply_chaos<R: RandomSource>(
    options: &mut OptionSet,
    chaos: ChaosLevel,
    threshold: u8,
    rng: &mut R,
) -> bool {
    if !chaos.shuffles(threshold) {
        return false;
    }
    rng.shuffle(options.as_mut_slice());
    tracing::debug!(target: "vp_engine", chaos = chaos.value(), "options shuffled");
    true
}

/// Wrap the message in the mood's template.
///
/// Returns the new `(message, explanation)`. With no mood both pass through
/// untouched. The logical mood also fills an empty explanation.
pub fn apply_mood(mood: Option<Mood>, message: &str, explanation: &str) -> (String, String) {
    match mood {
        None => (message.to_string(), explanation.to_string()),
        Some(mood) => {
            let explanation = if mood == Mood::Logical && explanation.is_empty() {
                LOGICAL_EXPLANATION.to_string()
            } else {
                explanation.to_string()
            };
            (mood.wrap(message), explanation)
        }
    }
}
