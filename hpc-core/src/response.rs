//! Response bodies for the five calculations.
//!
//! Series default to empty when the backend omits them. The in-band `error`
//! field never reaches these types: `client::decode_reply` turns it into
//! `InvokeError::Backend` first.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Time labels arrive as strings or as raw numbers depending on how the
/// backend serialized its timestamps; keep both as text.
fn time_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Value> = Vec::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|v| match v {
            Value::String(s) => s,
            other => other.to_string(),
        })
        .collect())
}

/// `/calculate`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AnnualLoadResponse {
    #[serde(default, deserialize_with = "time_labels")]
    pub time_steps: Vec<String>,
    #[serde(rename = "waerme_ges_kW", default)]
    pub heat_load_kw: Vec<f64>,
    #[serde(default)]
    pub hourly_temperatures: Vec<f64>,
}

/// `/calculate_cop`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CopResponse {
    pub cop: f64,
}

/// A quantity the backend reports either as one number or as an hourly series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Scalar(f64),
    Series(Vec<f64>),
}

impl Quantity {
    pub fn series(&self) -> Option<&[f64]> {
        match self {
            Quantity::Series(values) => Some(values),
            Quantity::Scalar(_) => None,
        }
    }

    /// Mean of a series, or the scalar itself.
    pub fn mean(&self) -> Option<f64> {
        match self {
            Quantity::Scalar(v) => Some(*v),
            Quantity::Series(values) if values.is_empty() => None,
            Quantity::Series(values) => Some(values.iter().sum::<f64>() / values.len() as f64),
        }
    }

    /// Sum of a series (hourly kW summed to kWh), or the scalar itself.
    pub fn total(&self) -> f64 {
        match self {
            Quantity::Scalar(v) => *v,
            Quantity::Series(values) => values.iter().sum(),
        }
    }
}

/// `/calculate_heatgen`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeatGenResponse {
    pub cop: Quantity,
    #[serde(rename = "stromverbrauch")]
    pub electricity: Quantity,
    #[serde(default, deserialize_with = "time_labels")]
    pub time_steps: Vec<String>,
}

/// `/calculate_cop_yearly`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CopYearlyResponse {
    #[serde(default, deserialize_with = "time_labels")]
    pub time_steps: Vec<String>,
    #[serde(rename = "COP", default)]
    pub cop: Vec<f64>,
    #[serde(default)]
    pub hourly_temperatures: Vec<f64>,
}

/// `/calculate_strombedarf`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StrombedarfResponse {
    #[serde(default, deserialize_with = "time_labels")]
    pub time_steps: Vec<String>,
    #[serde(rename = "waerme_ges_kW", default)]
    pub heat_load_kw: Vec<f64>,
    #[serde(rename = "strom_ges_kW", default)]
    pub electricity_kw: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn annual_load_decodes_mixed_time_labels() {
        let resp: AnnualLoadResponse = serde_json::from_value(json!({
            "time_steps": ["2021-01-01T00:00:00", 1609462800000i64],
            "waerme_ges_kW": [1.5, 2.0],
            "hourly_temperatures": [-3.2, -3.0],
        }))
        .unwrap();
        assert_eq!(resp.time_steps, vec!["2021-01-01T00:00:00", "1609462800000"]);
        assert_eq!(resp.heat_load_kw, vec![1.5, 2.0]);
    }

    #[test]
    fn heatgen_accepts_scalars_or_series() {
        let scalar: HeatGenResponse =
            serde_json::from_value(json!({ "cop": 3.1, "stromverbrauch": 4200.0 })).unwrap();
        assert_eq!(scalar.cop, Quantity::Scalar(3.1));
        assert!(scalar.time_steps.is_empty());

        let series: HeatGenResponse = serde_json::from_value(json!({
            "cop": [3.0, 4.0],
            "stromverbrauch": [1.0, 2.5],
            "time_steps": ["a", "b"],
        }))
        .unwrap();
        assert_eq!(series.cop.mean(), Some(3.5));
        assert_eq!(series.electricity.total(), 3.5);
        assert_eq!(series.cop.series(), Some(&[3.0, 4.0][..]));
    }

    #[test]
    fn cop_yearly_missing_series_default_empty() {
        let resp: CopYearlyResponse = serde_json::from_value(json!({ "COP": [2.9] })).unwrap();
        assert_eq!(resp.cop, vec![2.9]);
        assert!(resp.time_steps.is_empty());
        assert!(resp.hourly_temperatures.is_empty());
    }

    #[test]
    fn empty_series_has_no_mean() {
        assert_eq!(Quantity::Series(Vec::new()).mean(), None);
    }
}
