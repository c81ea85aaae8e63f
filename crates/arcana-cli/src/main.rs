//! CLI frontend for the Arcana divination engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "arcana",
    about = "Arcana — a Major Arcana tarot reading engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a full reading for a spread and print it
    Reading {
        /// Spread kind: single, three_card, celtic_cross
        spread: String,

        /// Question to focus the reading on
        #[arg(short, long)]
        question: Option<String>,

        /// User to attribute the reading to
        #[arg(short, long)]
        user: Option<String>,

        /// RNG seed for a reproducible reading
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the raw reading as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Draw cards from the deck without creating a reading
    Draw {
        /// Number of cards to draw (1-22)
        #[arg(default_value = "3")]
        count: usize,

        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List every card in the Major Arcana
    Cards,

    /// Show detailed information about one card
    Card {
        /// Arcana number (0-21)
        arcana_id: u8,
    },

    /// Search cards by name, keyword, or description
    Search {
        /// Search query (at least 2 characters)
        query: String,
    },

    /// Run sample readings and show the day's counters
    Stats {
        /// Number of sample readings to run
        #[arg(short, long, default_value = "5")]
        readings: u32,

        /// Spread kind for the sample readings
        #[arg(long, default_value = "single")]
        spread: String,

        /// RNG seed for reproducible samples
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Reading {
            spread,
            question,
            user,
            seed,
            json,
        } => commands::reading::run(&spread, question.as_deref(), user.as_deref(), seed, json),
        Commands::Draw { count, seed } => commands::draw::run(count, seed),
        Commands::Cards => commands::cards::run(),
        Commands::Card { arcana_id } => commands::card::run(arcana_id),
        Commands::Search { query } => commands::search::run(&query),
        Commands::Stats {
            readings,
            spread,
            seed,
        } => commands::stats::run(readings, &spread, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
