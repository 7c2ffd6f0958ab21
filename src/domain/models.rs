use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Legacy status values the v1 clients were built against.
pub const LEGACY_STATUSES: [&str; 3] = ["PAID", "CANCELLED", "SHIPPED"];

/// Incoming v2 order body. Every field is optional and individually
/// tolerant: a missing or wrongly-typed field takes its own documented
/// default without discarding valid siblings.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderV2 {
    #[serde(deserialize_with = "lenient")]
    pub order_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub state: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub amount: Option<AmountV2>,
    #[serde(deserialize_with = "lenient")]
    pub customer: Option<CustomerV2>,
    #[serde(deserialize_with = "lenient")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub line_items: Option<Vec<LineItemV2>>,
    pub tracking_number: Option<Value>,
}

/// Decodes a field to `None` instead of failing the whole container when the
/// value has the wrong type.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// v2 sends `amount` as an object, but payloads captured mid-migration still
/// carry the bare v1 number. Anything else collapses to `Other` and maps to
/// the 0.0 default.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)] // currency and the Other payload are decoded but dropped
pub enum AmountV2 {
    Object {
        value: Option<f64>,
        currency: Option<String>,
    },
    Number(f64),
    Other(Value),
}

/// Nested customer object. v2 also carries `email`, which legacy has no
/// column for; it is dropped by not being declared here.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct CustomerV2 {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// v2 line item. `unitPrice` and `tax` are dropped the same way as `email`.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct LineItemV2 {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub quantity: Option<i64>,
}

/// Flat order shape the v1 clients expect.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderLegacy {
    pub order_id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub total_price: f64,
    pub created_at: String,
    pub status: String,
    pub items: Vec<LegacyItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LegacyItem {
    pub product_name: String,
    pub qty: i64,
}

/// v1 error shape: one code, one message.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ErrorV1 {
    pub error: String,
    pub message: String,
}

/// Monitoring classification of an HTTP response during the migration
/// window. A sunset v1 endpoint answering 410 is not an outage.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeprecationClass {
    Ok,
    Deprecated,
    Outage,
}

#[derive(Debug, Serialize, Clone)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct ModeReport {
    pub mode: String,
    pub passed: usize,
    pub total: usize,
    pub results: Vec<CheckResult>,
}

#[derive(Debug, Serialize, Clone)]
pub struct GateReport {
    pub overall: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<ModeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compat: Option<ModeReport>,
    pub recommendations: Vec<String>,
}
