use crate::cli::{Cli, Commands, RunMode};
use crate::domain::models::JsonOut;
use crate::services::checks::{run_compat_checks, run_raw_checks};
use crate::services::fetch::Fetcher;
use crate::services::gate::{build_gate_report, exit_code, mode_report};
use crate::services::mapper::order_to_legacy;
use crate::services::output::{print_mode_report, print_out};
use std::io::Read;

pub fn handle_commands(cli: &Cli, fetcher: &Fetcher, mode: RunMode) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Run { .. } => {
            let raw = matches!(mode, RunMode::Raw | RunMode::Both)
                .then(|| mode_report("raw", run_raw_checks(fetcher)));
            let compat = matches!(mode, RunMode::Compat | RunMode::Both)
                .then(|| mode_report("compat", run_compat_checks(fetcher)));
            let report = build_gate_report(raw, compat);

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: report.overall == "ok",
                        data: report.clone()
                    })?
                );
            } else {
                if let Some(r) = &report.raw {
                    println!("== RAW (unmapped v2, failures expected) ==");
                    print_mode_report(r);
                }
                if let Some(c) = &report.compat {
                    println!("== COMPAT (mapped, all must pass) ==");
                    print_mode_report(c);
                }
                println!("gate: {}", report.overall);
                for rec in &report.recommendations {
                    println!("hint: {rec}");
                }
            }

            let code = exit_code(&report);
            if code != 0 {
                std::process::exit(code);
            }
        }
        Commands::Cases => {
            fetcher.cases().validate()?;
            print_out(cli.json, &fetcher.cases().cases, |c| {
                format!(
                    "{}\t{} {}\t{}",
                    c.id, c.request.method, c.request.path, c.response.status_code
                )
            })?;
        }
        Commands::Map { input } => {
            let raw = if input == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                std::fs::read_to_string(input)?
            };
            let body: serde_json::Value = serde_json::from_str(&raw)?;
            let legacy = order_to_legacy(&body);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: legacy
                    })?
                );
            } else {
                println!("{}", serde_json::to_string_pretty(&legacy)?);
            }
        }
    }
    Ok(())
}
