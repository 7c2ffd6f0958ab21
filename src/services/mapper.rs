use crate::domain::models::{
    AmountV2, DeprecationClass, ErrorV1, LegacyItem, OrderLegacy, OrderV2, LEGACY_STATUSES,
};
use serde_json::Value;

const FALLBACK_STATUS: &str = "PAID";
const FALLBACK_DATE: &str = "1970-01-01";
const PLACEHOLDER_ITEM: &str = "MISSING_ITEM";
const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";
const UNKNOWN_ERROR_MESSAGE: &str = "An error occurred";

/// Translates a v2 order body into the flat shape legacy clients expect.
///
/// Total over any JSON input: missing or malformed pieces take the
/// documented defaults, `items` is never empty and `status` is always one of
/// the legacy values. Same input always yields the same output.
pub fn order_to_legacy(body: &Value) -> OrderLegacy {
    let v2: OrderV2 = serde_json::from_value(body.clone()).unwrap_or_default();

    let customer = v2.customer.unwrap_or_default();

    let total_price = match v2.amount {
        Some(AmountV2::Object { value, .. }) => value.unwrap_or(0.0),
        Some(AmountV2::Number(n)) => n,
        _ => 0.0,
    };

    let items = match v2.line_items.as_deref() {
        Some(list) if !list.is_empty() => list
            .iter()
            .map(|li| LegacyItem {
                product_name: li.name.clone().unwrap_or_default(),
                qty: li.quantity.unwrap_or(0),
            })
            .collect(),
        _ => vec![LegacyItem {
            product_name: PLACEHOLDER_ITEM.to_string(),
            qty: 0,
        }],
    };

    OrderLegacy {
        order_id: v2.order_id.unwrap_or_default(),
        customer_id: customer.id.unwrap_or_default(),
        customer_name: customer.name.unwrap_or_default(),
        total_price,
        created_at: date_only(v2.created_at.as_deref()),
        status: downgrade_state(v2.state.as_deref()),
        items,
        // Only forwarded when the key was present; legacy consumers treat an
        // explicit null as a data error.
        tracking_number: v2.tracking_number,
    }
}

/// Enum downgrade: legacy values pass through, known v2 additions take their
/// agreed substitute, anything else (including absent) takes the safe
/// default.
fn downgrade_state(state: Option<&str>) -> String {
    let Some(s) = state else {
        return FALLBACK_STATUS.to_string();
    };
    if LEGACY_STATUSES.contains(&s) {
        return s.to_string();
    }
    match s {
        "FULFILLED" => "PAID".to_string(),
        _ => FALLBACK_STATUS.to_string(),
    }
}

/// Lexical truncation of an ISO-8601 timestamp to its date component. No
/// timezone conversion; absent or empty input takes the epoch date.
fn date_only(created_at: Option<&str>) -> String {
    match created_at {
        Some(s) if !s.is_empty() => s.chars().take(10).collect(),
        _ => FALLBACK_DATE.to_string(),
    }
}

/// Normalizes an error body to the v1 `{error, message}` shape.
///
/// A body already in v1 shape passes through unchanged. A v2 `errors` array
/// surfaces only its first element; the rest are dropped (documented lossy
/// behavior). Everything else takes the fixed fallback. The status code is
/// part of the wire contract but not consulted by any branch.
pub fn normalize_error(_status: u16, body: &Value) -> ErrorV1 {
    if let (Some(error), Some(message)) = (
        body.get("error").and_then(Value::as_str),
        body.get("message").and_then(Value::as_str),
    ) {
        return ErrorV1 {
            error: error.to_string(),
            message: message.to_string(),
        };
    }

    if let Some(first) = body
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
    {
        return ErrorV1 {
            error: first
                .get("code")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_ERROR_CODE)
                .to_string(),
            message: first
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_ERROR_MESSAGE)
                .to_string(),
        };
    }

    ErrorV1 {
        error: UNKNOWN_ERROR_CODE.to_string(),
        message: UNKNOWN_ERROR_MESSAGE.to_string(),
    }
}

/// Classifies a response for monitoring. A sunset v1 endpoint answering 410
/// with the deprecation code is DEPRECATED, not an outage; a 410 with any
/// other body is.
pub fn classify_deprecation(status: u16, body: &Value) -> DeprecationClass {
    match status {
        200 => DeprecationClass::Ok,
        410 if body.get("error").and_then(Value::as_str) == Some("API_VERSION_DEPRECATED") => {
            DeprecationClass::Deprecated
        }
        _ => DeprecationClass::Outage,
    }
}
