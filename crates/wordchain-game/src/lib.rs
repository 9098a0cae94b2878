//! Wordchain — the word-chain game engine.
//!
//! A human and the bot take turns extending a chain of words. Each word must
//! start with the last letter of the previous one, must not repeat, and must
//! exist in the corpus. The bot loses when it has no word left to play.

pub mod application;
pub mod domain;
