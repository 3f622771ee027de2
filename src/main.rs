//! # Nether
//!
//! A chatbot-styled task tracker for the terminal. Type commands, one per line:
//!
//! ```text
//! todo buy milk
//! deadline submit report /by 2024-03-15 1800
//! event team sync /from 2024-03-15 1400 /to 2024-03-15 1500
//! list
//! mark 2
//! unmark 2
//! delete 1
//! bye
//! ```
//!
//! Tasks are saved to `./data/nether.txt` after every change. Use
//! `--data-file` to point somewhere else.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use nether::chat::run_session;
use nether::config::Config;

#[derive(Parser)]
#[command(name = "nether")]
#[command(about = "Chat-style personal task tracker", version, long_about = None)]
struct Cli {
    /// Task file to load and save (default: ./data/nether.txt)
    #[arg(long, value_name = "PATH")]
    data_file: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "nether=debug" } else { "nether=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "nether", &mut io::stdout());
        }
        None => {
            let config = Config::new(cli.data_file);
            let stdin = io::stdin();
            run_session(&config, stdin.lock(), io::stdout().lock())?;
        }
    }
    Ok(())
}
