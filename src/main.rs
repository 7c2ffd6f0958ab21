use clap::Parser;

mod cases;
mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands, RunMode};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = services::config::load_config()?;
    let base_url = services::config::resolve_base_url(cli.base_url.clone(), &config);
    let mode = match &cli.command {
        Commands::Run { mode } => services::config::resolve_mode(*mode),
        _ => RunMode::Both,
    };

    let cases = cases::CaseSet::embedded()?;
    let fetcher = services::fetch::Fetcher::new(cases, base_url, config.timeout_ms);

    commands::handle_commands(&cli, &fetcher, mode)
}
