//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.
//! Handlers write through an [`OutputWriter`](crate::output::OutputWriter)
//! so their output can be captured in tests.

mod completions;
mod config;
mod join;
mod split;
mod utils;

pub use completions::handle_completions;
pub use config::handle_config;
pub use join::handle_join;
pub use split::handle_split;
