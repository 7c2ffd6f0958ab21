use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn cases_lists_embedded_table() {
    let env = TestEnv::new();
    env.cmd()
        .arg("cases")
        .assert()
        .success()
        .stdout(contains("order_with_line_items"))
        .stdout(contains("deprecated_v1_endpoint"));
}

#[test]
fn run_reports_summary_per_mode() {
    let env = TestEnv::new();
    env.cmd()
        .arg("run")
        .assert()
        .success()
        .stdout(contains("Summary: 0/6 PASS"))
        .stdout(contains("Summary: 5/5 PASS"))
        .stdout(contains("gate: ok"));
}

#[test]
fn map_translates_a_v2_body() {
    let env = TestEnv::new();
    let input = env.write_file(
        "order.json",
        r#"{"customer":{"id":"C123","name":"Alice"},"state":"FULFILLED","createdAt":"2024-12-18T10:30:00Z"}"#,
    );
    env.cmd()
        .arg("map")
        .arg(input)
        .assert()
        .success()
        .stdout(contains("\"customerId\": \"C123\""))
        .stdout(contains("\"status\": \"PAID\""))
        .stdout(contains("\"createdAt\": \"2024-12-18\""))
        .stdout(contains("MISSING_ITEM"));
}
