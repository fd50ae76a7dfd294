//! Command modules for the hlx CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand lives in its own file with an args struct and a
//! `run_*` entry point; output goes through [`traits::Report`].

pub mod common;
pub mod traits;

pub mod languages;
pub mod stats;
pub mod tokens;

// Re-export command types and functions
pub use languages::{run_languages, LanguagesArgs};
pub use stats::{run_stats, StatsArgs};
pub use tokens::{run_tokens, TokensArgs};
