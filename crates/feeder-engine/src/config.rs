//! Panel Configuration
//!
//! Device location, polling cadences and the startup delay. Every field has a
//! default so a page can override just the ones it cares about.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::{PanelError, PanelResult, Refresh};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelConfig {
    /// Prefix for every device path; empty means same origin
    pub base_url: String,
    /// Grace period before the first full load, while the device warms up
    pub initial_load_delay_ms: u64,
    pub wash_timer_poll_ms: u64,
    pub weight_drop_poll_ms: u64,
    pub status_poll_ms: u64,
    /// Applies to both schedule lists
    pub schedule_poll_ms: u64,
    /// Body of the test alert
    pub test_sms_message: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            initial_load_delay_ms: 1_000,
            wash_timer_poll_ms: 2_000,
            weight_drop_poll_ms: 10_000,
            status_poll_ms: 30_000,
            schedule_poll_ms: 15_000,
            test_sms_message: "Test message from pet feeder".to_string(),
        }
    }
}

impl PanelConfig {
    pub fn from_json(json: &str) -> PanelResult<Self> {
        let config: PanelConfig = serde_json::from_str(json).map_err(|e| PanelError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PanelResult<()> {
        let periods = [
            ("washTimerPollMs", self.wash_timer_poll_ms),
            ("weightDropPollMs", self.weight_drop_poll_ms),
            ("statusPollMs", self.status_poll_ms),
            ("schedulePollMs", self.schedule_poll_ms),
        ];
        match periods.iter().find(|(_, ms)| *ms == 0) {
            Some((name, _)) => Err(PanelError::Config(format!("{} must be greater than zero", name))),
            None => Ok(()),
        }
    }

    pub fn initial_load_delay(&self) -> Duration {
        Duration::from_millis(self.initial_load_delay_ms)
    }

    /// How often a view re-polls on its own
    pub fn cadence(&self, refresh: Refresh) -> Duration {
        let ms = match refresh {
            Refresh::Status => self.status_poll_ms,
            Refresh::WashTimer => self.wash_timer_poll_ms,
            Refresh::WeightDrop => self.weight_drop_poll_ms,
            Refresh::Schedule(_) => self.schedule_poll_ms,
        };
        Duration::from_millis(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScheduleKind;

    #[test]
    fn test_default_cadences() {
        let config = PanelConfig::default();
        assert_eq!(config.cadence(Refresh::WashTimer), Duration::from_secs(2));
        assert_eq!(config.cadence(Refresh::WeightDrop), Duration::from_secs(10));
        assert_eq!(config.cadence(Refresh::Status), Duration::from_secs(30));
        assert_eq!(config.cadence(Refresh::Schedule(ScheduleKind::Wash)), Duration::from_secs(15));
        assert_eq!(config.initial_load_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_override() {
        let config = PanelConfig::from_json(r#"{"baseUrl":"http://192.168.4.1","statusPollMs":5000}"#).unwrap();
        assert_eq!(config.base_url, "http://192.168.4.1");
        assert_eq!(config.status_poll_ms, 5_000);
        assert_eq!(config.wash_timer_poll_ms, 2_000);
    }

    #[test]
    fn test_rejects_zero_period() {
        let err = PanelConfig::from_json(r#"{"washTimerPollMs":0}"#).unwrap_err();
        assert!(err.to_string().contains("washTimerPollMs"));
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(PanelConfig::from_json("{"), Err(PanelError::Config(_))));
    }
}
