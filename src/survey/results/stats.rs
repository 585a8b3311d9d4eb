use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Aggregate figures computed by the server over every stored survey.
///
/// Every field is optional. A field carrying the wrong JSON type is treated as
/// absent so one bad value never hides the rest of the table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyAggregateStats {
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub avg_age: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub max_age: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub min_age: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub pizza_pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub pasta_pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub pap_pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub avg_eat_out: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub avg_watch_movies: Option<f64>,
    #[serde(
        rename = "avgWatchTV",
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub avg_watch_tv: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub avg_listen_radio: Option<f64>,
}

impl SurveyAggregateStats {
    /// Interpret a `/api/results` body. `null` means the server has nothing to
    /// report; any other non-object shape carries no figures at all.
    pub fn from_payload(payload: Value) -> Option<Self> {
        match payload {
            Value::Null => None,
            Value::Object(_) => Some(serde_json::from_value(payload).unwrap_or_default()),
            _ => Some(Self::default()),
        }
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|value| value.as_f64())
        .filter(|number| number.is_finite()))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| {
        value.as_u64().or_else(|| {
            value
                .as_f64()
                .filter(|number| {
                    *number >= 0.0 && number.fract() == 0.0 && *number <= u64::MAX as f64
                })
                .map(|number| number as u64)
        })
    }))
}
