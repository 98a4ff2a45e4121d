//! Schedules
//!
//! The device keeps two sets of `HH:MM` trigger times, one for feeding and one
//! for washing. The panel never edits a set locally; it only mirrors the last
//! list the device returned.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Which of the two schedule sets a time belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleKind {
    Feed,
    Wash,
}

impl ScheduleKind {
    /// Lowercase noun used in prompts and messages
    pub fn noun(&self) -> &'static str {
        match self {
            ScheduleKind::Feed => "feed",
            ScheduleKind::Wash => "wash",
        }
    }

    pub fn list_title(&self) -> &'static str {
        match self {
            ScheduleKind::Feed => "Current Feed Times:",
            ScheduleKind::Wash => "Current Wash Times:",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            ScheduleKind::Feed => "No feed times scheduled",
            ScheduleKind::Wash => "No wash times scheduled",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            ScheduleKind::Feed => "Error loading feed times",
            ScheduleKind::Wash => "Error loading wash times",
        }
    }
}

/// A time of day in one of the schedule sets.
///
/// Values typed by the operator go through [`ScheduledTime::parse`]; values
/// coming back from the device are kept exactly as sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduledTime(String);

impl ScheduledTime {
    /// Validate operator input from the time picker
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValidationError::MissingTime);
        }
        if !is_clock_time(raw) {
            return Err(ValidationError::MalformedTime);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ScheduledTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 24-hour `HH:MM`, the 5-character form the device stores
fn is_clock_time(raw: &str) -> bool {
    let Some((hours, minutes)) = raw.split_once(':') else {
        return false;
    };
    let two_digits = |s: &str| s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hours) || !two_digits(minutes) {
        return false;
    }
    matches!((hours.parse::<u8>(), minutes.parse::<u8>()), (Ok(h), Ok(m)) if h < 24 && m < 60)
}
