use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `vsa` binary.
#[derive(Debug, Parser)]
#[command(
    name = "vsa",
    version,
    about = "Vietnamese sentiment assistant - classify sentences as positive, negative, or neutral",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Sentence to classify; omit to start the interactive loop
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Sentiment backend: modernbert-base or modernbert-large
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Path to the history database
    #[arg(long, global = true)]
    pub db: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            model: self.model.clone(),
            db: self.db.clone(),
        }
    }
}
