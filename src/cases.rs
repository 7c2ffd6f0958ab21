use serde::{Deserialize, Serialize};
use serde_json::Value;

const EMBEDDED_CASES: &str = include_str!("../fixtures/cases.json");

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CaseSet {
    pub cases: Vec<Case>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Case {
    pub id: String,
    pub request: CaseRequest,
    pub response: CaseResponse,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CaseRequest {
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub query: std::collections::BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CaseResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: Value,
}

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("unknown case id: {0}")]
    UnknownCase(String),
    #[error("duplicate case id: {0}")]
    DuplicateCase(String),
    #[error("case {case} has an invalid method: {method:?}")]
    InvalidMethod { case: String, method: String },
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("response from {url} is not JSON: {detail}")]
    Decode { url: String, detail: String },
}

impl CaseSet {
    /// Loads the case table compiled into the binary. The table ships with
    /// the crate, so a parse failure here is a build defect, not user input.
    pub fn embedded() -> anyhow::Result<Self> {
        let set: Self = serde_json::from_str(EMBEDDED_CASES)?;
        Ok(set)
    }

    pub fn get(&self, id: &str) -> Result<&Case, FetchError> {
        self.cases
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| FetchError::UnknownCase(id.to_string()))
    }

    pub fn validate(&self) -> Result<(), FetchError> {
        let mut seen = std::collections::HashSet::new();
        for c in &self.cases {
            if !seen.insert(&c.id) {
                return Err(FetchError::DuplicateCase(c.id.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_parses_and_validates() {
        let set = CaseSet::embedded().expect("embedded cases parse");
        set.validate().expect("no duplicate ids");
        assert_eq!(set.cases.len(), 6);
    }

    #[test]
    fn lookup_by_id() {
        let set = CaseSet::embedded().unwrap();
        let c = set.get("deprecated_v1_endpoint").unwrap();
        assert_eq!(c.response.status_code, 410);
        assert_eq!(c.request.path, "/api/v1/orders");
    }

    #[test]
    fn unknown_id_is_an_error() {
        let set = CaseSet::embedded().unwrap();
        let err = set.get("nope").unwrap_err();
        assert!(matches!(err, FetchError::UnknownCase(_)));
    }

    #[test]
    fn duplicate_ids_fail_validation() {
        let mut set = CaseSet::embedded().unwrap();
        let dup = set.cases[0].clone();
        set.cases.push(dup);
        assert!(matches!(
            set.validate(),
            Err(FetchError::DuplicateCase(_))
        ));
    }
}
