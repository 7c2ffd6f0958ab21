use crate::domain::models::{CheckResult, DeprecationClass, LEGACY_STATUSES};
use crate::services::fetch::Fetcher;
use crate::services::mapper::{classify_deprecation, normalize_error, order_to_legacy};
use serde_json::Value;

// Case ids the checks are pinned to (see fixtures/cases.json).
const CASE_NO_ITEMS: &str = "order_without_items";
const CASE_LINE_ITEMS: &str = "order_with_line_items";
const CASE_NEW_STATE: &str = "order_with_new_state_enum";
const CASE_ERROR_ARRAY: &str = "v2_error_array";
const CASE_DEPRECATED_V1: &str = "deprecated_v1_endpoint";

fn pass(name: &str, detail: impl Into<String>) -> CheckResult {
    CheckResult {
        name: name.to_string(),
        passed: true,
        detail: detail.into(),
    }
}

fn fail(name: &str, detail: impl Into<String>) -> CheckResult {
    CheckResult {
        name: name.to_string(),
        passed: false,
        detail: detail.into(),
    }
}

/// Adapter failures become a failed check carrying the error text; the run
/// itself never crashes on a bad fetch.
fn fetch_or_fail(
    fetcher: &Fetcher,
    name: &str,
    case_id: &str,
) -> Result<(u16, Value), CheckResult> {
    fetcher.fetch(case_id).map_err(|e| fail(name, e.to_string()))
}

fn is_date_only(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        })
}

/// Checks asserting legacy expectations directly against unmapped v2 bodies.
/// Under the gate every one of these is expected to FAIL; a pass means the
/// breakage a check documents no longer exists.
pub fn run_raw_checks(fetcher: &Fetcher) -> Vec<CheckResult> {
    vec![
        raw_items_present(fetcher),
        raw_state_enum(fetcher),
        raw_flat_customer(fetcher),
        raw_numeric_total(fetcher),
        raw_date_only_created_at(fetcher),
        raw_flat_error_shape(fetcher),
    ]
}

/// Checks asserting the same expectations after mapping. All expected to
/// PASS.
pub fn run_compat_checks(fetcher: &Fetcher) -> Vec<CheckResult> {
    vec![
        compat_legacy_shape(fetcher),
        compat_customer_flattened(fetcher),
        compat_amount_converted(fetcher),
        compat_error_normalized(fetcher),
        compat_deprecation_classified(fetcher),
    ]
}

fn raw_items_present(fetcher: &Fetcher) -> CheckResult {
    let name = "legacy-items-present";
    let (status, body) = match fetch_or_fail(fetcher, name, CASE_NO_ITEMS) {
        Ok(v) => v,
        Err(r) => return r,
    };
    if status != 200 {
        return fail(name, format!("expected 200, got {status}"));
    }
    match body.get("items").and_then(Value::as_array) {
        Some(items) if !items.is_empty() => pass(name, "items present and non-empty"),
        _ => fail(name, "items missing or empty"),
    }
}

fn raw_state_enum(fetcher: &Fetcher) -> CheckResult {
    let name = "legacy-state-enum";
    let (status, body) = match fetch_or_fail(fetcher, name, CASE_NEW_STATE) {
        Ok(v) => v,
        Err(r) => return r,
    };
    if status != 200 {
        return fail(name, format!("expected 200, got {status}"));
    }
    match body.get("state").and_then(Value::as_str) {
        Some(state) if LEGACY_STATUSES.contains(&state) => {
            pass(name, format!("state={state} is legacy-safe"))
        }
        Some(state) => fail(name, format!("new state value: {state}")),
        None => fail(name, "state missing"),
    }
}

fn raw_flat_customer(fetcher: &Fetcher) -> CheckResult {
    let name = "flat-customer-fields";
    let (status, body) = match fetch_or_fail(fetcher, name, CASE_NO_ITEMS) {
        Ok(v) => v,
        Err(r) => return r,
    };
    if status != 200 {
        return fail(name, format!("expected 200, got {status}"));
    }
    if body.get("customer").map(Value::is_object).unwrap_or(false) {
        return fail(name, format!("nested customer object: {}", body["customer"]));
    }
    if body.get("customerId").and_then(Value::as_str).is_some()
        && body.get("customerName").and_then(Value::as_str).is_some()
    {
        pass(name, "flat customerId/customerName present")
    } else {
        fail(name, "customerId/customerName missing")
    }
}

fn raw_numeric_total(fetcher: &Fetcher) -> CheckResult {
    let name = "numeric-total-price";
    let (status, body) = match fetch_or_fail(fetcher, name, CASE_NEW_STATE) {
        Ok(v) => v,
        Err(r) => return r,
    };
    if status != 200 {
        return fail(name, format!("expected 200, got {status}"));
    }
    if body.get("amount").map(Value::is_object).unwrap_or(false) {
        return fail(name, format!("amount is an object: {}", body["amount"]));
    }
    match body.get("totalPrice").and_then(Value::as_f64) {
        Some(total) => pass(name, format!("totalPrice={total}")),
        None => fail(name, "totalPrice missing or non-numeric"),
    }
}

fn raw_date_only_created_at(fetcher: &Fetcher) -> CheckResult {
    let name = "date-only-created-at";
    let (status, body) = match fetch_or_fail(fetcher, name, CASE_NO_ITEMS) {
        Ok(v) => v,
        Err(r) => return r,
    };
    if status != 200 {
        return fail(name, format!("expected 200, got {status}"));
    }
    match body.get("createdAt").and_then(Value::as_str) {
        Some(created) if is_date_only(created) => pass(name, format!("createdAt={created}")),
        Some(created) => fail(name, format!("timestamp, not a date: {created}")),
        None => fail(name, "createdAt missing"),
    }
}

fn raw_flat_error_shape(fetcher: &Fetcher) -> CheckResult {
    let name = "flat-error-shape";
    let (status, body) = match fetch_or_fail(fetcher, name, CASE_ERROR_ARRAY) {
        Ok(v) => v,
        Err(r) => return r,
    };
    if status != 400 {
        return fail(name, format!("expected 400, got {status}"));
    }
    if body.get("errors").map(Value::is_array).unwrap_or(false) {
        return fail(name, "v2 errors array instead of flat error/message");
    }
    if body.get("error").is_some() && body.get("message").is_some() {
        pass(name, "flat error/message present")
    } else {
        fail(name, "neither v1 nor v2 error shape")
    }
}

fn compat_legacy_shape(fetcher: &Fetcher) -> CheckResult {
    let name = "legacy-shape-produced";
    let (status, body) = match fetch_or_fail(fetcher, name, CASE_LINE_ITEMS) {
        Ok(v) => v,
        Err(r) => return r,
    };
    if status != 200 {
        return fail(name, format!("expected 200, got {status}"));
    }
    let legacy = order_to_legacy(&body);
    if legacy.items.is_empty() {
        return fail(name, "items empty after mapping");
    }
    if !LEGACY_STATUSES.contains(&legacy.status.as_str()) {
        return fail(name, format!("status not legacy-safe: {}", legacy.status));
    }
    if !is_date_only(&legacy.created_at) {
        return fail(name, format!("createdAt not a date: {}", legacy.created_at));
    }
    if legacy.customer_id.is_empty() {
        return fail(name, "customerId empty");
    }
    pass(
        name,
        format!(
            "status={} items={} createdAt={}",
            legacy.status,
            legacy.items.len(),
            legacy.created_at
        ),
    )
}

fn compat_customer_flattened(fetcher: &Fetcher) -> CheckResult {
    let name = "customer-flattened";
    let (status, body) = match fetch_or_fail(fetcher, name, CASE_NO_ITEMS) {
        Ok(v) => v,
        Err(r) => return r,
    };
    if status != 200 {
        return fail(name, format!("expected 200, got {status}"));
    }
    if !body.get("customer").map(Value::is_object).unwrap_or(false) {
        return fail(name, "precondition: v2 body has no nested customer");
    }
    let mapped = match serde_json::to_value(order_to_legacy(&body)) {
        Ok(v) => v,
        Err(e) => return fail(name, e.to_string()),
    };
    if mapped.get("customer").is_some() {
        return fail(name, "mapped body still carries nested customer");
    }
    match (
        mapped.get("customerId").and_then(Value::as_str),
        mapped.get("customerName").and_then(Value::as_str),
    ) {
        (Some(id), Some(cn)) if !id.is_empty() => {
            pass(name, format!("customerId={id} customerName={cn}"))
        }
        _ => fail(name, "flattened customer fields missing or empty"),
    }
}

fn compat_amount_converted(fetcher: &Fetcher) -> CheckResult {
    let name = "amount-converted";
    let (status, body) = match fetch_or_fail(fetcher, name, CASE_NEW_STATE) {
        Ok(v) => v,
        Err(r) => return r,
    };
    if status != 200 {
        return fail(name, format!("expected 200, got {status}"));
    }
    if !body.get("amount").map(Value::is_object).unwrap_or(false) {
        return fail(name, "precondition: v2 amount is not an object");
    }
    let expected = body["amount"].get("value").and_then(Value::as_f64);
    let legacy = order_to_legacy(&body);
    match expected {
        Some(value) if legacy.total_price == value => {
            pass(name, format!("totalPrice={}", legacy.total_price))
        }
        _ => fail(
            name,
            format!("totalPrice={} does not match amount.value", legacy.total_price),
        ),
    }
}

fn compat_error_normalized(fetcher: &Fetcher) -> CheckResult {
    let name = "error-format-normalized";
    let (status, body) = match fetch_or_fail(fetcher, name, CASE_ERROR_ARRAY) {
        Ok(v) => v,
        Err(r) => return r,
    };
    if status != 400 {
        return fail(name, format!("expected 400, got {status}"));
    }
    if !body.get("errors").map(Value::is_array).unwrap_or(false) {
        return fail(name, "precondition: v2 body has no errors array");
    }
    let normalized = normalize_error(status, &body);
    if normalized.error.is_empty() || normalized.message.is_empty() {
        return fail(name, "normalized error has empty fields");
    }
    pass(name, format!("error={}", normalized.error))
}

fn compat_deprecation_classified(fetcher: &Fetcher) -> CheckResult {
    let name = "deprecation-classified";
    let (status, body) = match fetch_or_fail(fetcher, name, CASE_DEPRECATED_V1) {
        Ok(v) => v,
        Err(r) => return r,
    };
    let class = classify_deprecation(status, &body);
    if class == DeprecationClass::Deprecated {
        pass(name, "410 sunset classified as DEPRECATED, not outage")
    } else {
        fail(name, format!("classified as {class:?} (status={status})"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::CaseSet;

    fn offline() -> Fetcher {
        Fetcher::new(CaseSet::embedded().unwrap(), None, 0)
    }

    #[test]
    fn raw_checks_all_document_breakage() {
        let results = run_raw_checks(&offline());
        assert_eq!(results.len(), 6);
        for r in &results {
            assert!(!r.passed, "{} unexpectedly passed: {}", r.name, r.detail);
        }
    }

    #[test]
    fn compat_checks_all_hold() {
        let results = run_compat_checks(&offline());
        assert_eq!(results.len(), 5);
        for r in &results {
            assert!(r.passed, "{} failed: {}", r.name, r.detail);
        }
    }

    #[test]
    fn missing_items_fails_raw_but_passes_mapped() {
        let fetcher = offline();
        let raw = raw_items_present(&fetcher);
        assert!(!raw.passed);

        let (_, body) = fetcher.fetch(CASE_NO_ITEMS).unwrap();
        let legacy = order_to_legacy(&body);
        assert!(!legacy.items.is_empty());
    }

    #[test]
    fn adapter_errors_become_failed_checks() {
        // Empty table: every fetch misses, every check reports FAIL with the
        // adapter error as detail.
        let fetcher = Fetcher::new(CaseSet { cases: vec![] }, None, 0);
        for r in run_raw_checks(&fetcher)
            .into_iter()
            .chain(run_compat_checks(&fetcher))
        {
            assert!(!r.passed);
            assert!(r.detail.contains("unknown case id"), "{}", r.detail);
        }
    }

    #[test]
    fn date_only_matcher() {
        assert!(is_date_only("2024-12-18"));
        assert!(!is_date_only("2024-12-18T10:30:00Z"));
        assert!(!is_date_only("2024/12/18"));
        assert!(!is_date_only(""));
    }
}
