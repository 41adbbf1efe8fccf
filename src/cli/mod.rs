//! CLI module - Command-line interface for movieapp
//!
//! Each subcommand drives one view controller and prints its rendering.

mod commands;

use clap::{Parser, Subcommand};

/// movieapp - Movie catalog viewer
/// Browse the IMDb top list and keep a favorites list
#[derive(Parser)]
#[command(name = "movieapp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Signed-in user email; selects the favorites list
    #[arg(long, global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the top movies
    #[command(alias = "ls", alias = "list")]
    Top,

    /// Show details about a movie
    #[command(alias = "i")]
    Info {
        /// Movie ID (e.g. top1)
        id: String,
    },

    /// Show favorite movies
    #[command(alias = "favs")]
    Favorites,

    /// Add or remove a movie from favorites
    #[command(alias = "toggle")]
    Fav {
        /// Movie ID
        id: String,
    },

    /// Create default config file
    Init,
}

pub use commands::*;
