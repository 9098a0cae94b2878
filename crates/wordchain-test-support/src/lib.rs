//! Shared test clocks and RNGs for the word-chain game engine.

mod clock;
mod rng;

pub use clock::{FixedClock, ManualClock};
pub use rng::{MockRng, SequenceRng};
