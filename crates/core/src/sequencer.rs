//! Sequencer module - decides which shape comes next
//!
//! The default [`Sequencer`] walks a fixed cycle over the seven shapes. It is
//! not random: the same cursor always produces the same shape, which keeps
//! games reproducible.
//!
//! [`BagSequencer`] is an alternative policy that deals shuffled bags of all
//! seven shapes from a seeded LCG. It is never used unless a caller picks it.

use crate::types::{ShapeKind, SEQUENCER_START, SHAPE_ORDER};

/// Source of upcoming shapes
pub trait PieceSource {
    /// Draw the next shape, advancing the source
    fn next_shape(&mut self) -> ShapeKind;

    /// Shape the next call to [`next_shape`](Self::next_shape) will return
    fn peek(&self) -> ShapeKind;
}

/// Deterministic cyclic sequencer
///
/// Each draw returns `SHAPE_ORDER[counter % 7]` and then advances the counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequencer {
    counter: u64,
}

impl Sequencer {
    /// Create a sequencer at the standard starting counter
    pub fn new() -> Self {
        Self::starting_at(SEQUENCER_START)
    }

    /// Create a sequencer whose first draw is `SHAPE_ORDER[counter % 7]`
    pub fn starting_at(counter: u64) -> Self {
        Self { counter }
    }

    /// Create a sequencer whose first draw is `kind`
    pub fn starting_with(kind: ShapeKind) -> Self {
        let index = SHAPE_ORDER.iter().position(|k| *k == kind).unwrap_or(0);
        Self::starting_at(index as u64)
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceSource for Sequencer {
    fn next_shape(&mut self) -> ShapeKind {
        let kind = self.peek();
        self.counter = self.counter.wrapping_add(1);
        kind
    }

    fn peek(&self) -> ShapeKind {
        SHAPE_ORDER[(self.counter % SHAPE_ORDER.len() as u64) as usize]
    }
}

/// The cycle never ends, so `next` always returns `Some`.
impl Iterator for Sequencer {
    type Item = ShapeKind;

    fn next(&mut self) -> Option<ShapeKind> {
        Some(self.next_shape())
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Zero would make the generator degenerate
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Seeded 7-bag sequencer
///
/// Every run of seven draws contains each shape exactly once.
#[derive(Debug, Clone)]
pub struct BagSequencer {
    bag: [ShapeKind; 7],
    bag_index: usize,
    rng: SimpleRng,
}

impl BagSequencer {
    pub fn new(seed: u32) -> Self {
        let mut sequencer = Self {
            bag: SHAPE_ORDER,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        sequencer.refill();
        sequencer
    }

    fn refill(&mut self) {
        self.bag = SHAPE_ORDER;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }
}

impl PieceSource for BagSequencer {
    fn next_shape(&mut self) -> ShapeKind {
        if self.bag_index >= self.bag.len() {
            self.refill();
        }
        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }

    fn peek(&self) -> ShapeKind {
        if let Some(kind) = self.bag.get(self.bag_index) {
            return *kind;
        }

        // Preview the next bag on a copy so the real RNG is untouched.
        let mut preview = self.rng.clone();
        let mut next_bag = SHAPE_ORDER;
        preview.shuffle(&mut next_bag);
        next_bag[0]
    }
}
