//! Wash Timer
//!
//! Countdown state of the wash valve and the duration setting that drives it.

use serde::Deserialize;

use super::error::ValidationError;

/// Snapshot from `GET /getWashDuration`.
///
/// While active the device keeps `elapsed + remaining == duration`; the panel
/// only displays the numbers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WashTimerState {
    #[serde(rename = "washDuration")]
    pub duration_seconds: u32,
    #[serde(rename = "isWashActive")]
    pub is_active: bool,
    /// Countdown fields may be left out while idle
    #[serde(rename = "elapsedTime", default)]
    pub elapsed_seconds: u32,
    #[serde(rename = "remainingTime", default)]
    pub remaining_seconds: u32,
}

/// Wash duration accepted by `POST /setWashDuration`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WashDuration(u32);

impl WashDuration {
    pub const MIN_SECONDS: u32 = 1;
    pub const MAX_SECONDS: u32 = 3600;

    /// Parse the numeric input field; whole seconds only
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let seconds: i64 = raw.trim().parse().map_err(|_| ValidationError::Duration)?;
        if seconds < i64::from(Self::MIN_SECONDS) || seconds > i64::from(Self::MAX_SECONDS) {
            return Err(ValidationError::Duration);
        }
        Ok(Self(seconds as u32))
    }

    pub fn seconds(&self) -> u32 {
        self.0
    }
}
