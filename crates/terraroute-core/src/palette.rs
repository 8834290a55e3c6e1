// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Terraroute Contributors

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Colors cycled through for consecutive arcs.
pub const PALETTE: [&str; 8] = [
    "#f94144", "#f3722c", "#f8961e", "#f9c74f", "#90be6d", "#43aa8b", "#4d908e", "#577590",
];

/// Source of palette indices. Swapped for a seeded source in tests so the
/// transform output is reproducible.
pub trait ColorSource {
    /// Returns an index in `0..len`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Random palette picks backed by any `rand` generator.
pub struct RandomColors<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomColors<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomColors<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ColorSource for RandomColors<R> {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Walks the palette from a starting index, wrapping at the end.
#[derive(Debug, Clone)]
pub struct PaletteCycle {
    index: usize,
}

impl PaletteCycle {
    pub fn starting_at(index: usize) -> Self {
        Self {
            index: index % PALETTE.len(),
        }
    }
}

impl Iterator for PaletteCycle {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        let color = PALETTE[self.index];
        self.index = (self.index + 1) % PALETTE.len();
        Some(color)
    }
}
