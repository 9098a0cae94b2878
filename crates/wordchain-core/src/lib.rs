//! Wordchain Core — shared abstractions.
//!
//! This crate defines the time, randomness and error types that the game
//! engine and its adapters depend on. It contains no game logic.

pub mod clock;
pub mod error;
pub mod rng;
