//! Command-line interface
//!
//! Clap-based CLI structure and command dispatch. Both scanners are exposed as
//! subcommands so they can serve as pre-commit and commit-msg hook entry
//! points; exit code 1 on blocking findings comes from the bailed error.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

/// leakgate - pattern/entropy secret gate for staged files and commit messages
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan staged files for secrets (pre-commit entry point)
    Scan {
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Scan a commit message for secrets (commit-msg entry point)
    CheckMessage {
        /// Path to a commit-message file; falls back to .git/COMMIT_EDITMSG,
        /// then the latest commit, then piped stdin
        file: Option<String>,
    },
    /// Git hooks management
    #[command(subcommand)]
    Hooks(HooksCommands),
    /// Show version information
    Version,
}

/// Git hooks subcommands
#[derive(Subcommand)]
pub enum HooksCommands {
    /// Install pre-commit and commit-msg hooks
    Install,
    /// Remove installed hooks
    Uninstall,
    /// List hook installation status
    List,
    /// Run a hook by its git name
    Run {
        /// Hook name (pre-commit, commit-msg)
        hook: String,
        /// Hook argument (commit-message file path for commit-msg)
        arg: Option<String>,
    },
}

impl Cli {
    /// Execute the CLI command.
    pub async fn run(self) -> Result<()> {
        let output = Output::new(self.verbose, self.quiet);

        match self.command {
            Some(Commands::Scan { format }) => commands::scan::execute(&format, &output).await,
            Some(Commands::CheckMessage { file }) => {
                commands::check_message::execute(file.as_deref(), &output).await
            }
            Some(Commands::Hooks(cmd)) => commands::hooks::execute(cmd, &output).await,
            Some(Commands::Version) => commands::version::execute(&output).await,
            None => {
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
