use rand::prelude::*;

use crate::*;

/// Source of uniformly distributed cell indices used to place mines.
///
/// Index `i` is the cell `(i % width, i / width)`.
pub trait CellSampler {
    /// Draws an index uniformly from `0..total`, `total` is never zero.
    fn sample_cell(&mut self, total: CellCount) -> CellCount;
}

impl<R: Rng> CellSampler for R {
    fn sample_cell(&mut self, total: CellCount) -> CellCount {
        self.random_range(0..total)
    }
}

/// Seeded sampler, reproducible across platforms for a given seed.
pub fn seeded_sampler(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Replays a fixed list of indices, cycling when exhausted.
#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ScriptedSampler<'a> {
    draws: &'a [CellCount],
    next: usize,
}

#[cfg(test)]
impl<'a> ScriptedSampler<'a> {
    pub(crate) fn new(draws: &'a [CellCount]) -> Self {
        Self { draws, next: 0 }
    }
}

#[cfg(test)]
impl CellSampler for ScriptedSampler<'_> {
    fn sample_cell(&mut self, total: CellCount) -> CellCount {
        let Some(&draw) = self.draws.get(self.next % self.draws.len().max(1)) else {
            return 0;
        };
        self.next += 1;
        draw % total
    }
}
