use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

mod common;
use common::TestEnv;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn gate_report_matches_contract() {
    let env = TestEnv::new();
    let out = env.run_json(&["run"]);
    validate("gate_report.schema.json", &out);
}

#[test]
fn single_mode_reports_match_contract() {
    let env = TestEnv::new();
    for mode in ["raw", "compat"] {
        let out = env.run_json(&["run", "--mode", mode]);
        validate("gate_report.schema.json", &out);
    }
}
