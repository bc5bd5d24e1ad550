//! Validated feature records
//!
//! A `FeatureRecord` is the only thing the scoring path accepts: all seven
//! schema features present, every value a finite number. Construction from a
//! raw JSON object is the validation boundary - missing names are reported
//! jointly, bad values name the offending feature.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use super::layout::{feature_index, FEATURE_COUNT, FEATURE_SCHEMA};

/// A complete, validated set of the seven model features.
/// Immutable once built; values are stored in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    values: [f64; FEATURE_COUNT],
}

impl FeatureRecord {
    /// Validate a raw request object into a record.
    ///
    /// Every schema name must be present; all absent names are collected and
    /// reported together in schema order. Values may be JSON numbers or
    /// numeric strings, but must coerce to a finite float. Extra keys in the
    /// input are ignored.
    pub fn from_raw(raw: &Map<String, Value>) -> AppResult<Self> {
        let missing: Vec<String> = FEATURE_SCHEMA
            .iter()
            .filter(|name| !raw.contains_key(**name))
            .map(|name| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(AppError::MissingFeatures(missing));
        }

        let mut values = [0.0; FEATURE_COUNT];
        for (i, name) in FEATURE_SCHEMA.iter().enumerate() {
            values[i] = raw
                .get(*name)
                .and_then(coerce)
                .ok_or_else(|| AppError::NonNumericFeature(name.to_string()))?;
        }

        Ok(Self { values })
    }

    /// Values in canonical schema order, ready for the model input tensor.
    pub fn as_vector(&self) -> [f64; FEATURE_COUNT] {
        self.values
    }

    /// Look up a single feature value by schema name.
    pub fn get(&self, name: &str) -> Option<f64> {
        feature_index(name).map(|i| self.values[i])
    }
}

/// Records serialize as the plain seven-key object callers submitted,
/// keys in schema order.
impl Serialize for FeatureRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (i, name) in FEATURE_SCHEMA.iter().enumerate() {
            map.serialize_entry(name, &self.values[i])?;
        }
        map.end()
    }
}

/// Coerce a JSON value to a finite float. NaN and infinities are rejected
/// along with anything non-numeric.
fn coerce(value: &Value) -> Option<f64> {
    let v = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    v.is_finite().then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete_input() -> Map<String, Value> {
        json!({
            "temp_mean": 32,
            "temp_range": 14,
            "humidity_min": 18,
            "wind_speed_max": 12,
            "pressure_mean": 1011,
            "solar_radiation_mean": 290,
            "cloud_cover_mean": 8
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn test_valid_record() {
        let record = FeatureRecord::from_raw(&complete_input()).unwrap();
        let vector = record.as_vector();
        assert_eq!(vector[0], 32.0);
        assert_eq!(vector[2], 18.0);
        assert_eq!(vector[6], 8.0);
        assert_eq!(record.get("pressure_mean"), Some(1011.0));
        assert_eq!(record.get("bogus"), None);
    }

    #[test]
    fn test_missing_single_feature() {
        let mut raw = complete_input();
        raw.remove("humidity_min");

        match FeatureRecord::from_raw(&raw) {
            Err(AppError::MissingFeatures(names)) => {
                assert_eq!(names, vec!["humidity_min".to_string()]);
            }
            other => panic!("expected MissingFeatures, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_features_reported_jointly_in_schema_order() {
        let mut raw = complete_input();
        raw.remove("cloud_cover_mean");
        raw.remove("temp_mean");
        raw.remove("wind_speed_max");

        match FeatureRecord::from_raw(&raw) {
            Err(AppError::MissingFeatures(names)) => {
                assert_eq!(names, vec!["temp_mean", "wind_speed_max", "cloud_cover_mean"]);
            }
            other => panic!("expected MissingFeatures, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_string_coerces() {
        let mut raw = complete_input();
        raw.insert("temp_mean".into(), json!(" 31.5 "));

        let record = FeatureRecord::from_raw(&raw).unwrap();
        assert_eq!(record.get("temp_mean"), Some(31.5));
    }

    #[test]
    fn test_non_numeric_value_names_feature() {
        let mut raw = complete_input();
        raw.insert("pressure_mean".into(), json!("high"));

        match FeatureRecord::from_raw(&raw) {
            Err(AppError::NonNumericFeature(name)) => assert_eq!(name, "pressure_mean"),
            other => panic!("expected NonNumericFeature, got {:?}", other),
        }
    }

    #[test]
    fn test_null_value_rejected() {
        let mut raw = complete_input();
        raw.insert("solar_radiation_mean".into(), Value::Null);

        assert!(matches!(
            FeatureRecord::from_raw(&raw),
            Err(AppError::NonNumericFeature(_))
        ));
    }

    #[test]
    fn test_extra_keys_ignored() {
        let mut raw = complete_input();
        raw.insert("station_id".into(), json!("WX-204"));

        assert!(FeatureRecord::from_raw(&raw).is_ok());
    }

    #[test]
    fn test_serializes_with_all_schema_keys() {
        let record = FeatureRecord::from_raw(&complete_input()).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), FEATURE_COUNT);
        for name in FEATURE_SCHEMA {
            assert!(object.contains_key(*name), "missing {} in output", name);
        }
    }
}
