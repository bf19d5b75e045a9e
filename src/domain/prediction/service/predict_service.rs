use anyhow::Result;
use serde_json::Value;

use crate::core::client::predictor::PredictorClient;

/// Feature vector layout the predictor was trained against.
pub const FEATURE_KEYS: [&str; 7] = [
    "nitrogen",
    "phosphorus",
    "potassium",
    "temperature",
    "humidity",
    "ph",
    "rainfall",
];

pub async fn predict(client: &PredictorClient, data: Value) -> Result<Value> {
    let features = features_from_request(&data);
    client.predict(&features).await
}

/// Pull the fixed feature vector out of an arbitrary request payload.
///
/// Missing or non-numeric values read as 0.0; the predictor decides what to do
/// with them.
pub fn features_from_request(data: &Value) -> Vec<f64> {
    FEATURE_KEYS
        .iter()
        .map(|key| data.get(key).map(value_as_f64).unwrap_or(0.0))
        .collect()
}

fn value_as_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_features_in_fixed_order() {
        let payload = json!({
            "rainfall": 202.9,
            "nitrogen": 90,
            "phosphorus": 42,
            "potassium": 43,
            "temperature": 20.88,
            "humidity": 82.0,
            "ph": 6.5,
        });

        assert_eq!(
            features_from_request(&payload),
            vec![90.0, 42.0, 43.0, 20.88, 82.0, 6.5, 202.9]
        );
    }

    #[test]
    fn missing_and_malformed_values_default_to_zero() {
        let payload = json!({
            "nitrogen": "12.5",
            "ph": "acidic",
            "humidity": null,
        });

        let features = features_from_request(&payload);
        assert_eq!(features.len(), FEATURE_KEYS.len());
        assert_eq!(features[0], 12.5);
        assert!(features[1..].iter().all(|v| *v == 0.0));
    }
}
