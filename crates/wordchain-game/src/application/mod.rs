//! Application layer: the session registry, the turn resolver and read-only
//! queries over both.

pub mod query_handlers;
pub mod registry;
pub mod resolver;
pub mod stats;
