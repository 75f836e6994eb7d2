//! Dashboard data model
//!
//! Wire types for the `/dashboard` and `/health` responses. There is no schema
//! validation: malformed amounts, names and chart points show up as rendering
//! artifacts and never fail the refresh.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A currency amount as sent by the server.
///
/// Numbers are taken as-is, numeric strings are parsed, `null` is zero and
/// anything else (including a missing field) is NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Amount(pub f64);

impl Amount {
    pub fn missing() -> Self {
        Amount(f64::NAN)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Numeric reading of an arbitrary JSON value. `null` maps to `null_as`.
fn lenient_number(value: &Value, null_as: f64) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::Null => null_as,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// Text reading of an arbitrary JSON value: strings as-is, everything else
/// as its JSON text (`null` becomes `"null"`).
fn lenient_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Amount(lenient_number(&value, 0.0)))
    }
}

fn deserialize_lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_text(Value::deserialize(deserializer)?))
}

fn deserialize_lenient_labels<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(lenient_text).collect(),
        _ => Vec::new(),
    })
}

/// Chart points: `null` and unparseable entries become NaN and are drawn as gaps.
fn deserialize_lenient_values<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .iter()
            .map(|item| lenient_number(item, f64::NAN))
            .collect(),
        _ => Vec::new(),
    })
}

/// A named amount: one beneficiary category or the investment line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub name: String,
    #[serde(default = "Amount::missing")]
    pub amount: Amount,
}

/// Daily collections series. `labels` and `values` are parallel arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    #[serde(default, deserialize_with = "deserialize_lenient_labels")]
    pub labels: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_values")]
    pub values: Vec<f64>,
}

/// Everything the dashboard shows, received wholesale on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default = "Amount::missing")]
    pub total_collections: Amount,
    #[serde(default = "Amount::missing")]
    pub roi: Amount,
    #[serde(default = "Amount::missing")]
    pub total_expenses: Amount,
    #[serde(default = "Amount::missing")]
    pub account_balance: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary_distribution: Option<Vec<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investments: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartSeries>,
    /// Server-reported failure; a non-empty value fails the refresh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DashboardSnapshot {
    /// The server-reported error message, if the payload carries one.
    pub fn server_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|msg| !msg.is_empty())
    }
}

/// Response of the `/health` route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub file_exists: bool,
    #[serde(default)]
    pub cache_active: bool,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_payload() {
        let body = r#"{
            "total_collections": 1234567.5,
            "roi": 200,
            "total_expenses": 50.25,
            "account_balance": 1000,
            "beneficiary_distribution": [
                {"name": "Poor and Needy", "amount": 10},
                {"name": "The Wayfarer", "amount": 2.5}
            ],
            "investments": {"name": "Zakat Investments", "amount": 75},
            "chart": {"labels": ["Jan 01", "Jan 02"], "values": [100, 250.5]}
        }"#;
        let snapshot: DashboardSnapshot = serde_json::from_str(body).unwrap();

        assert_eq!(snapshot.total_collections.value(), 1234567.5);
        assert_eq!(snapshot.roi.value(), 200.0);
        let categories = snapshot.beneficiary_distribution.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Poor and Needy");
        assert_eq!(snapshot.investments.unwrap().amount.value(), 75.0);
        let chart = snapshot.chart.unwrap();
        assert_eq!(chart.labels, vec!["Jan 01", "Jan 02"]);
        assert_eq!(chart.values, vec![100.0, 250.5]);
        assert!(snapshot.error.is_none());
    }

    #[test]
    // Optional regions that are absent stay absent rather than defaulting to empty.
    fn test_absent_optional_fields() {
        let body = r#"{"total_collections": 1, "roi": 2, "total_expenses": 3, "account_balance": 4}"#;
        let snapshot: DashboardSnapshot = serde_json::from_str(body).unwrap();
        assert!(snapshot.beneficiary_distribution.is_none());
        assert!(snapshot.investments.is_none());
        assert!(snapshot.chart.is_none());
    }

    #[test]
    fn test_lenient_amounts() {
        let body = r#"{"total_collections": "42.5", "roi": null, "total_expenses": "abc"}"#;
        let snapshot: DashboardSnapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snapshot.total_collections.value(), 42.5);
        assert_eq!(snapshot.roi.value(), 0.0);
        assert!(snapshot.total_expenses.value().is_nan());
        // Missing entirely
        assert!(snapshot.account_balance.value().is_nan());
    }

    #[test]
    // Malformed chart points are gaps, not decode failures.
    fn test_lenient_chart_values() {
        let body = r#"{
            "total_collections": 1, "roi": 2, "total_expenses": 3, "account_balance": 4,
            "chart": {"labels": ["Jan 01", null, "Jan 03"], "values": [100, null, "250.5"]}
        }"#;
        let snapshot: DashboardSnapshot = serde_json::from_str(body).unwrap();
        let chart = snapshot.chart.unwrap();

        assert_eq!(chart.labels, vec!["Jan 01", "null", "Jan 03"]);
        assert_eq!(chart.values[0], 100.0);
        assert!(chart.values[1].is_nan());
        assert_eq!(chart.values[2], 250.5);
        assert_eq!(snapshot.total_collections.value(), 1.0);
    }

    #[test]
    fn test_chart_arrays_of_wrong_type_are_empty() {
        let body = r#"{"chart": {"labels": null, "values": {"a": 1}}}"#;
        let snapshot: DashboardSnapshot = serde_json::from_str(body).unwrap();
        let chart = snapshot.chart.unwrap();
        assert!(chart.labels.is_empty());
        assert!(chart.values.is_empty());
    }

    #[test]
    fn test_lenient_category_names() {
        let body = r#"{
            "beneficiary_distribution": [
                {"name": null, "amount": 5},
                {"name": 42, "amount": 1},
                {"amount": 2}
            ]
        }"#;
        let snapshot: DashboardSnapshot = serde_json::from_str(body).unwrap();
        let categories = snapshot.beneficiary_distribution.unwrap();

        assert_eq!(categories[0].name, "null");
        assert_eq!(categories[0].amount.value(), 5.0);
        assert_eq!(categories[1].name, "42");
        assert_eq!(categories[2].name, "");
    }

    #[test]
    fn test_server_error_ignores_empty_message() {
        let with_error: DashboardSnapshot =
            serde_json::from_str(r#"{"error": "Sheet not found: 'Summary'"}"#).unwrap();
        assert_eq!(with_error.server_error(), Some("Sheet not found: 'Summary'"));

        let empty: DashboardSnapshot = serde_json::from_str(r#"{"error": ""}"#).unwrap();
        assert_eq!(empty.server_error(), None);
    }

    #[test]
    fn test_health_status() {
        let health: HealthStatus = serde_json::from_str(
            r#"{"status": "healthy", "file_exists": true, "cache_active": false}"#,
        )
        .unwrap();
        assert!(health.is_healthy());
        assert!(health.file_exists);
        assert!(!health.cache_active);
    }
}
