use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shelver")]
#[command(about = "Shelve an OpenAudible library export into an AudioBookshelf library")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print every directory and file decision
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Copy the audiobooks of a books.json export into an author/series/title layout
    Build {
        /// Path to the books.json file
        catalog: PathBuf,

        /// AudioBookshelf library directory (uses config default if not specified)
        dest: Option<PathBuf>,

        /// Directory holding the exported audio files (default: books/ beside the catalog)
        #[arg(long)]
        source: Option<PathBuf>,

        /// Report what would be done without touching the library
        #[arg(long)]
        dry_run: bool,

        /// Print the organized structure before building
        #[arg(long)]
        print_structure: bool,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the author/series/title structure of a books.json export
    Summarize {
        /// Path to the books.json file
        catalog: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
