use crate::domain::models::{JsonOut, ModeReport};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_mode_report(report: &ModeReport) {
    for r in &report.results {
        let status = if r.passed { "PASS" } else { "FAIL" };
        let mut line = format!("{status} - {}", r.name);
        if !r.detail.is_empty() {
            line.push_str(&format!(" :: {}", r.detail));
        }
        println!("{line}");
    }
    println!("Summary: {}/{} PASS", report.passed, report.total);
}
