//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "showdown",
    version,
    about = "Compare five-card poker hands from the command line"
)]
pub struct ShowdownCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two five-card hands
    Compare {
        /// Left hand, five tokens like "2S 3H TC JD AH"
        left: String,
        /// Right hand, same format
        right: String,
        /// Write a JSONL comparison record to this file
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Show the best category of a single hand and its evidence cards
    Rank {
        /// Hand, five tokens like "2S 3H TC JD AH"
        hand: String,
    },
    /// Compare hands pairwise from a file, one comparison per line
    Batch {
        /// Input file: 10 card tokens per line (left five, then right five)
        #[arg(long)]
        input: PathBuf,
        /// Write JSONL comparison records to this file
        #[arg(long)]
        log: Option<PathBuf>,
    },
}
