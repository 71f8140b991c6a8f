//! Metrics Exposition
//!
//! Line-oriented `name value` rendering of a stats snapshot.

use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::metrics::StatsSnapshot;

/// Prefix applied to every exposed metric name
pub const METRIC_PREFIX: &str = "telemon_";

/// Renders one `telemon_<key> <value>` line per snapshot field.
///
/// Works from the snapshot's serialized form so the key set always matches
/// the JSON stats body. Integers print as-is, floats with three decimals,
/// strings quoted. Lines come out sorted by key.
pub fn render_metrics(snapshot: &StatsSnapshot) -> Result<String> {
    let Value::Object(fields) = serde_json::to_value(snapshot)? else {
        return Err(ApiError::Internal(
            "stats snapshot did not serialize to an object".to_string(),
        ));
    };

    let mut out = String::new();
    for (key, value) in &fields {
        out.push_str(&format!("{}{} {}\n", METRIC_PREFIX, key, format_value(value)));
    }
    Ok(out)
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Number(n) if n.is_f64() => format!("{:.3}", n.as_f64().unwrap_or_default()),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("\"{}\"", s),
        other => format!("\"{}\"", other),
    }
}
