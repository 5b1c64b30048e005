//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use pmc_board::output::OutputMode;

/// pmc-board - Render the bootcamp member status board
#[derive(Parser, Debug)]
#[command(
    name = "pmc-board",
    version,
    about = "Render the bootcamp member status board",
    long_about = "Reads the program state in .obpmc/data and writes the ranked\n\
                  member board to members/readme.md.\n\n\
                  Run without arguments to regenerate the board."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Project root containing .obpmc/
    #[arg(short, long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Print the board to stdout instead of writing the file
    #[arg(long)]
    pub stdout: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the board (default)
    Generate,

    /// Show the ranked board summary without writing anything
    Status,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command.unwrap_or(Command::Generate) {
        Command::Generate => commands::generate(&cli.root, cli.stdout, output_mode),
        Command::Status => commands::status(&cli.root, output_mode),
    }
}
