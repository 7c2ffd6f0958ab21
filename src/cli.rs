use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "ordgate", version, about = "Order API v1->v2 migration compatibility gate")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Base endpoint for live checks (falls back to BASE_URL, then config; unset = offline fixtures)"
    )]
    pub base_url: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the migration checks and gate on the result
    Run {
        #[arg(long, value_enum, help = "Check set to run (falls back to MODE, then both)")]
        mode: Option<RunMode>,
    },
    /// List and validate the embedded case table
    Cases,
    /// Map one v2 order body (file or '-' for stdin) to the legacy shape
    Map { input: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    /// Assert legacy expectations against unmapped v2 data (breakage must show)
    Raw,
    /// Assert the same expectations against mapped data (must all hold)
    Compat,
    /// Both passes, gated on the combined contract
    Both,
}
