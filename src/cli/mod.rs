//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the pokedex binary.

use clap::{Parser, Subcommand};

/// PokeAPI command-line interface.
#[derive(Parser, Debug)]
#[command(name = "pokedex", about = "PokeAPI lookup CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a formatted summary.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Request timeout in seconds.
    #[arg(long, global = true, default_value = "5.0")]
    pub timeout: f64,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a pokemon by name or numeric id.
    Get {
        /// The pokemon name (e.g. "pikachu") or numeric id (e.g. "25").
        identifier: String,
    },
}
