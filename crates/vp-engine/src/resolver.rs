//! Mode resolution: map a mode to a selection and a themed message.
//!
//! Draw order against the random source is fixed: the selection index
//! (uniform modes only), then the message, then the explanation (explaining
//! modes only), then the meme reaction. Scripted sources rely on it.

use serde::{Deserialize, Serialize};

use crate::mode::{ModeSpec, SelectionRule};
use crate::options::OptionSet;
use crate::source::RandomSource;
use crate::tables::FlavorTables;

/// What the resolver picked and the flavor text drawn for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Index of the pick within the option set the resolver saw.
    pub selected_index: usize,
    /// The picked option.
    pub selected_option: String,
    /// Mode message, before any mood wrapping.
    pub message: String,
    /// Explanation ("" for modes that don't explain).
    pub explanation: String,
    /// Meme reaction.
    pub meme_reaction: String,
}

/// Resolve `mode` against `options`. Never fails; unknown modes take the
/// first option with the fallback message.
pub fn resolve<R: RandomSource>(
    mode: &ModeSpec,
    options: &OptionSet,
    tables: &FlavorTables,
    rng: &mut R,
) -> Resolution {
    let (selected_index, message, explanation) = match mode {
        ModeSpec::Known(mode) => {
            let index = match mode.selection_rule() {
                SelectionRule::Uniform => rng.pick_index(options.len()),
                SelectionRule::First => 0,
            };
            let message = tables.random_message(*mode, rng).to_string();
            let explanation = if mode.explains() {
                tables.random_explanation(*mode, rng).to_string()
            } else {
                String::new()
            };
            (index, message, explanation)
        }
        ModeSpec::Unknown(raw) => {
            tracing::debug!(target: "vp_engine", mode = %raw, "unknown mode, using default pick");
            (0, tables.fallback_message.clone(), String::new())
        }
    };

    let meme_reaction = tables.random_meme(rng).to_string();
    let selected_option = options
        .get(selected_index)
        .unwrap_or_else(|| options.first())
        .to_string();

    Resolution {
        selected_index,
        selected_option,
        message,
        explanation,
        meme_reaction,
    }
}
