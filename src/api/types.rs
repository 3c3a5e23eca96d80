//! Wire types exchanged with the calculator service.
//!
//! The client stores server records verbatim; the only status token it
//! interprets is [`STATUS_COMPLETED`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The one terminal status the service reports.
pub const STATUS_COMPLETED: &str = "completed";

/// Placeholder status for an entry the client has submitted but not yet
/// seen in a refresh. Never treated as completed.
pub const STATUS_PENDING: &str = "Pending";

/// A single tracked expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub id: String,
    pub expression: String,
    pub status: String,
    /// Absent while the service is still evaluating.
    #[serde(default)]
    pub result: Value,
}

impl Expression {
    /// The optimistic entry appended after a create request is accepted.
    pub fn pending(id: String, expression: String) -> Self {
        Self {
            id,
            expression,
            status: STATUS_PENDING.to_string(),
            result: Value::Null,
        }
    }

    /// Case-sensitive: `"Completed"` or `"COMPLETED"` do not count.
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }
}

/// Body of `POST /api/v1/calculate`.
#[derive(Debug, Serialize)]
pub struct NewExpression<'a> {
    pub id: &'a str,
    pub expression: &'a str,
}

/// Body of `GET /api/v1/expressions`.
#[derive(Debug, Deserialize)]
pub struct ExpressionList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub expressions: Vec<Expression>,
}

/// Body of `GET /api/v1/expressions/{id}/`.
#[derive(Debug, Deserialize)]
pub struct ExpressionDetail {
    pub expression: Expression,
}

/// Body of `GET /healthz`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HealthInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub build_version: String,
    #[serde(default)]
    pub build_time: String,
    #[serde(default)]
    pub git_tag: String,
    #[serde(default)]
    pub git_hash: String,
}

impl HealthInfo {
    pub fn summary(&self) -> String {
        let name = if self.name.is_empty() { "service" } else { &self.name };
        if self.build_version.is_empty() {
            name.to_string()
        } else {
            format!("{} {}", name, self.build_version)
        }
    }
}

// An empty collection on the service side is serialized as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Expression>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Expression>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Literal display of a result value. `null` stays `null`, strings are shown
/// without quotes and integral floats drop their fractional part.
pub fn format_result(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => {
                format!("{}", f as i128)
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
