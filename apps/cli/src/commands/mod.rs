//! Subcommand implementations.

pub mod bank;
pub mod drill;
pub mod stars;
