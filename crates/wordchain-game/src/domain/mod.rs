//! Domain types for the word-chain game.

pub mod corpus;
pub mod outcome;
pub mod selector;
pub mod session;
pub mod vocabulary;
