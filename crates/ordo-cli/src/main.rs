//! CLI frontend for the Ordo party-game oracle.

mod commands;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ordo",
    about = "Ordo — a party-game oracle that decrees who starts",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Consult the oracle once and print the decree
    Decree {
        /// RNG seed (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Custom rule catalog: JSON array of {title, description}
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Preferred-voice name pattern
        #[arg(long, default_value = "Male")]
        voice: String,

        /// Disable speech synthesis
        #[arg(short, long)]
        mute: bool,

        /// Skip the thinking pauses
        #[arg(short, long)]
        quick: bool,
    },

    /// List the rule catalog
    Rules {
        /// Custom rule catalog: JSON array of {title, description}
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },

    /// Launch the interactive full-screen oracle
    Tui {
        /// RNG seed (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Custom rule catalog: JSON array of {title, description}
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Preferred-voice name pattern
        #[arg(long, default_value = "Male")]
        voice: String,

        /// Disable speech synthesis
        #[arg(short, long)]
        mute: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decree {
            seed,
            rules,
            voice,
            mute,
            quick,
        } => commands::decree::run(rules.as_deref(), seed, &voice, mute, quick),
        Commands::Rules { rules } => commands::rules::run(rules.as_deref()),
        Commands::Tui {
            seed,
            rules,
            voice,
            mute,
        } => commands::tui::run(rules.as_deref(), seed, &voice, mute),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
