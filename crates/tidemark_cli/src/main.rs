//! Tidemark CLI
//!
//! Demo and diagnostic tools for the Tidemark feed engine.
//!
//! # Commands
//!
//! - `demo` - Run a scripted walkthrough of the feed operations
//! - `stats` - Seed a feed and print store-level diagnostics
//! - `version` - Show version information
//!
//! The engine is volatile and process-local, so every invocation works
//! against a feed it seeds itself.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Tidemark command-line feed tools.
#[derive(Parser)]
#[command(name = "tidemark")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted walkthrough of the feed operations
    Demo {
        /// Number of users to seed
        #[arg(short, long, default_value = "3")]
        users: usize,

        /// Number of events to store per user
        #[arg(short, long, default_value = "10")]
        events: usize,

        /// Per-user activity capacity
        #[arg(short, long, default_value = "5")]
        max_size: usize,

        /// Page size for the pagination walkthrough
        #[arg(short, long, default_value = "3")]
        per_page: usize,
    },

    /// Seed a feed and print store-level diagnostics
    Stats {
        /// Number of users to seed
        #[arg(short, long, default_value = "100")]
        users: usize,

        /// Number of events to store per user
        #[arg(short, long, default_value = "50")]
        events: usize,

        /// Per-user activity capacity
        #[arg(short, long, default_value = "25")]
        max_size: usize,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Demo {
            users,
            events,
            max_size,
            per_page,
        } => {
            commands::demo::run(users, events, max_size, per_page)?;
        }
        Commands::Stats {
            users,
            events,
            max_size,
            format,
        } => {
            commands::stats::run(users, events, max_size, &format)?;
        }
        Commands::Version => {
            println!("Tidemark CLI v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
