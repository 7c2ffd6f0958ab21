use crate::domain::models::{CheckResult, GateReport, ModeReport};

pub fn mode_report(mode: &str, results: Vec<CheckResult>) -> ModeReport {
    let passed = results.iter().filter(|r| r.passed).count();
    ModeReport {
        mode: mode.to_string(),
        passed,
        total: results.len(),
        results,
    }
}

fn raw_ok(raw: Option<&ModeReport>) -> bool {
    // RAW documents breakage: any passing check means the breakage a check
    // stands for is gone.
    raw.map(|r| r.passed == 0).unwrap_or(true)
}

fn compat_ok(compat: Option<&ModeReport>) -> bool {
    compat.map(|c| c.passed == c.total).unwrap_or(true)
}

pub fn build_gate_report(raw: Option<ModeReport>, compat: Option<ModeReport>) -> GateReport {
    let raw_ok = raw_ok(raw.as_ref());
    let compat_ok = compat_ok(compat.as_ref());

    let mut recommendations = Vec::new();
    if !raw_ok {
        recommendations.push(
            "A RAW check passed against unmapped v2 data; the breakage it documents is gone. Update or retire the check."
                .to_string(),
        );
    }
    if !compat_ok {
        recommendations.push(
            "A COMPAT check failed; fix the mapping before relying on the compatibility layer."
                .to_string(),
        );
    }

    GateReport {
        overall: if raw_ok && compat_ok {
            "ok"
        } else {
            "needs_attention"
        }
        .to_string(),
        raw,
        compat,
        recommendations,
    }
}

/// 0 = gate satisfied; 1 = COMPAT violated; 2 = RAW unexpectedly clean.
/// A COMPAT violation wins when both phases are off.
pub fn exit_code(report: &GateReport) -> i32 {
    if !compat_ok(report.compat.as_ref()) {
        1
    } else if !raw_ok(report.raw.as_ref()) {
        2
    } else {
        0
    }
}
