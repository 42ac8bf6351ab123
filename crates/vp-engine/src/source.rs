//! The random source seam.
//!
//! Every random draw the engine makes goes through [`RandomSource`]. The
//! production implementations delegate to `rand`; [`ScriptedSource`] replays
//! a fixed script so tests can pin down exactly which option and which
//! message come out.

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;

/// A source of uniform index draws and shuffles.
pub trait RandomSource {
    /// Draw an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Permute `items` in place.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl RandomSource for StdRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self);
    }
}

impl RandomSource for ThreadRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self);
    }
}

/// A deterministic source that replays queued draws.
///
/// Index draws pop from the index queue (reduced modulo `len`) and yield 0
/// once it runs dry. Shuffles pop a permutation where `perm[i]` names the
/// original position that ends up at `i`; with no permutation queued, or one
/// of the wrong length, the slice is left as is. Every shuffle call is
/// counted either way.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    indices: VecDeque<usize>,
    permutations: VecDeque<Vec<usize>>,
    shuffle_calls: usize,
    index_calls: usize,
}

impl ScriptedSource {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue index draws.
    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }

    /// Queue a permutation for the next shuffle.
    pub fn with_permutation(mut self, perm: impl IntoIterator<Item = usize>) -> Self {
        self.permutations.push_back(perm.into_iter().collect());
        self
    }

    /// How many times `shuffle` was called.
    pub fn shuffle_calls(&self) -> usize {
        self.shuffle_calls
    }

    /// How many index draws were made.
    pub fn index_calls(&self) -> usize {
        self.index_calls
    }
}

impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        self.index_calls += 1;
        match self.indices.pop_front() {
            Some(i) if len > 0 => i % len,
            _ => 0,
        }
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        self.shuffle_calls += 1;
        if let Some(perm) = self.permutations.pop_front() {
            if is_permutation(&perm, items.len()) {
                apply_permutation(items, &perm);
            }
        }
    }
}

fn is_permutation(perm: &[usize], len: usize) -> bool {
    if perm.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &p in perm {
        if p >= len || seen[p] {
            return false;
        }
        seen[p] = true;
    }
    true
}

/// Reorder `items` so that position `i` holds what was at `perm[i]`.
fn apply_permutation<T>(items: &mut [T], perm: &[usize]) {
    // pos[k]: where original element k currently sits.
    // at[j]: which original element currently sits at j.
    let mut pos: Vec<usize> = (0..items.len()).collect();
    let mut at: Vec<usize> = (0..items.len()).collect();
    for (i, &want) in perm.iter().enumerate() {
        let j = pos[want];
        let displaced = at[i];
        items.swap(i, j);
        at.swap(i, j);
        pos[want] = i;
        pos[displaced] = j;
    }
}
