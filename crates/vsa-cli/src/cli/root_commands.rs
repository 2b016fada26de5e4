use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree. Without a subcommand, `vsa` classifies its
/// positional text or, with none, starts the interactive loop.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show classification history, newest first.
    History(HistoryArgs),
    /// Show per-sentiment totals.
    Stats,
    /// Delete every stored classification.
    Clear(ClearArgs),
    /// Export history as CSV or JSON.
    Export(ExportArgs),
    /// Print the effective configuration.
    Config,
    /// Serve the web dashboard.
    Serve(ServeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Records per page (defaults to `store.history_limit`)
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Records to skip from the newest
    #[arg(short, long, default_value_t = 0)]
    pub offset: u32,
}

#[derive(Clone, Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// File format
    #[arg(value_enum)]
    pub kind: ExportFormat,

    /// Destination file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Bind address (defaults to `dashboard.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Port (defaults to `dashboard.port`)
    #[arg(long)]
    pub port: Option<u16>,

    /// Open the dashboard in a browser once listening
    #[arg(long)]
    pub open: bool,
}
