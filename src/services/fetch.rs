use crate::cases::{Case, CaseSet, FetchError};
use serde_json::Value;
use std::time::Duration;

/// Resolves a case id to a `(status, body)` pair.
///
/// Strategy is fixed at construction: with a base URL the case's request is
/// issued against the live endpoint, otherwise the embedded response is
/// served. The case table is injected and never mutated.
pub struct Fetcher {
    cases: CaseSet,
    base_url: Option<String>,
    timeout_ms: u64,
}

impl Fetcher {
    pub fn new(cases: CaseSet, base_url: Option<String>, timeout_ms: u64) -> Self {
        Self {
            cases,
            base_url,
            timeout_ms,
        }
    }

    pub fn cases(&self) -> &CaseSet {
        &self.cases
    }

    pub fn fetch(&self, case_id: &str) -> Result<(u16, Value), FetchError> {
        let case = self.cases.get(case_id)?;
        match &self.base_url {
            None => Ok((case.response.status_code, case.response.body.clone())),
            Some(base) => self.fetch_live(base, case),
        }
    }

    /// Blocking request against the configured endpoint. Any HTTP status is
    /// data here (the 400/410 cases are the point of the exercise); only
    /// transport failures and non-JSON bodies are errors.
    fn fetch_live(&self, base: &str, case: &Case) -> Result<(u16, Value), FetchError> {
        let url = format!("{}{}", base.trim_end_matches('/'), case.request.path);
        let http_err = |source: reqwest::Error| FetchError::Http {
            url: url.clone(),
            source,
        };

        let method = case
            .request
            .method
            .parse::<reqwest::Method>()
            .map_err(|_| FetchError::InvalidMethod {
                case: case.id.clone(),
                method: case.request.method.clone(),
            })?;
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(self.timeout_ms))
            .build()
            .map_err(http_err)?;
        let resp = client
            .request(method, &url)
            .query(&case.request.query)
            .send()
            .map_err(http_err)?;
        let status = resp.status().as_u16();
        let text = resp.text().map_err(http_err)?;
        let body = serde_json::from_str(&text).map_err(|e| FetchError::Decode {
            url: url.clone(),
            detail: e.to_string(),
        })?;
        Ok((status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::{CaseRequest, CaseResponse};

    #[test]
    fn offline_serves_embedded_response() {
        let fetcher = Fetcher::new(CaseSet::embedded().unwrap(), None, 0);
        let (status, body) = fetcher.fetch("order_without_items").unwrap();
        assert_eq!(status, 200);
        assert_eq!(body["orderId"], "ORD-123");
        assert_eq!(body["customer"]["name"], "Alice");
    }

    #[test]
    fn offline_unknown_case_errors() {
        let fetcher = Fetcher::new(CaseSet::embedded().unwrap(), None, 0);
        let err = fetcher.fetch("no_such_case").unwrap_err();
        assert!(err.to_string().contains("unknown case id"));
    }

    #[test]
    fn live_invalid_method_is_reported_not_defaulted() {
        // Rejected before any request goes out, so no endpoint is needed.
        let cases = CaseSet {
            cases: vec![Case {
                id: "bad_method".to_string(),
                request: CaseRequest {
                    method: "G ET".to_string(),
                    path: "/api/v2/orders".to_string(),
                    query: Default::default(),
                },
                response: CaseResponse {
                    status_code: 200,
                    body: serde_json::json!({}),
                },
            }],
        };
        let fetcher = Fetcher::new(cases, Some("http://127.0.0.1:9".to_string()), 100);
        let err = fetcher.fetch("bad_method").unwrap_err();
        assert!(matches!(err, FetchError::InvalidMethod { .. }));
        assert!(err.to_string().contains("bad_method"));
    }

    #[test]
    fn live_transport_failure_is_an_error_not_a_panic() {
        // Discard port; connection is refused immediately.
        let fetcher = Fetcher::new(
            CaseSet::embedded().unwrap(),
            Some("http://127.0.0.1:9".to_string()),
            500,
        );
        let err = fetcher.fetch("order_without_items").unwrap_err();
        assert!(matches!(err, FetchError::Http { .. }));
    }
}
