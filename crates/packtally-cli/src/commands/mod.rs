//! CLI command implementations.

pub mod completion;
pub mod pack;
pub mod stats;
