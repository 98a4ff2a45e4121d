//! Weight Drop Monitoring
//!
//! The device watches the load cell and alerts once the bowl has lost the
//! target number of grams.

use serde::Deserialize;

use super::error::ValidationError;

/// Snapshot from `GET /getWeightDrop`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeightDropState {
    #[serde(rename = "targetWeightDrop")]
    pub target_drop_grams: f64,
    #[serde(rename = "currentWeight")]
    pub current_weight_grams: f64,
    #[serde(rename = "isMonitoring", default)]
    pub is_monitoring: bool,
}

/// Target drop accepted by `POST /setWeightDrop`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightDrop(f64);

impl WeightDrop {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let grams: f64 = raw.trim().parse().map_err(|_| ValidationError::Weight)?;
        if !grams.is_finite() || grams < 0.0 {
            return Err(ValidationError::Weight);
        }
        Ok(Self(grams))
    }

    pub fn grams(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_accepts_zero_and_fractions() {
        assert_eq!(WeightDrop::parse("0").unwrap().grams(), 0.0);
        assert_eq!(WeightDrop::parse("12.5").unwrap().grams(), 12.5);
    }

    #[test]
    fn test_weight_rejects_negative_missing_and_garbage() {
        for raw in ["-0.1", "", "  ", "grams", "inf", "NaN"] {
            assert_eq!(WeightDrop::parse(raw), Err(ValidationError::Weight), "{raw}");
        }
    }

    #[test]
    fn test_decode_device_payload() {
        let state: WeightDropState =
            serde_json::from_str(r#"{"targetWeightDrop":50,"currentWeight":412.7,"isMonitoring":false}"#).unwrap();
        assert_eq!(state.target_drop_grams, 50.0);
        assert!(!state.is_monitoring);
    }

    #[test]
    fn test_missing_monitoring_flag_means_idle() {
        let state: WeightDropState =
            serde_json::from_str(r#"{"targetWeightDrop":10,"currentWeight":300}"#).unwrap();
        assert!(!state.is_monitoring);
    }
}
