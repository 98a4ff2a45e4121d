//! Render Fragments
//!
//! Pure functions from a device snapshot to the fragment shown for it.
//! Same snapshot in, same fragment out; nothing is carried between polls.

use super::Action;
use crate::domain::{ScheduleKind, ScheduledTime, WashTimerState, WeightDropState};

/// Emphasis of a row value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// Subsystem is running
    Active,
    /// Subsystem is idle
    Idle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: &'static str,
    pub value: String,
    pub tone: Tone,
}

impl Row {
    fn plain(label: &'static str, value: String) -> Self {
        Self { label, value, tone: Tone::Plain }
    }

    fn state(active: bool, active_text: &str) -> Self {
        let (value, tone) = if active { (active_text, Tone::Active) } else { ("Inactive", Tone::Idle) };
        Self { label: "Status", value: value.to_string(), tone }
    }
}

/// A button embedded in a fragment
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub label: &'static str,
    pub action: Action,
}

/// Wash timer or weight drop status card
#[derive(Debug, Clone, PartialEq)]
pub struct SubsystemFragment {
    pub title: &'static str,
    pub rows: Vec<Row>,
    /// Stop button, present only while the subsystem is running
    pub control: Option<Control>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub time: ScheduledTime,
    pub remove: Control,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleFragment {
    Listed { title: &'static str, entries: Vec<ScheduleEntry> },
    Empty { message: &'static str },
    Failed { message: &'static str },
}

/// Aggregate status, one entry per line of the device text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFragment {
    pub lines: Vec<String>,
}

pub fn wash_timer(state: &WashTimerState) -> SubsystemFragment {
    let mut rows = vec![
        Row::plain("Duration", format!("{} seconds", state.duration_seconds)),
        Row::state(state.is_active, "ACTIVE - Wash in progress"),
    ];
    let mut control = None;
    if state.is_active {
        rows.push(Row::plain("Elapsed", format!("{}s", state.elapsed_seconds)));
        rows.push(Row::plain("Remaining", format!("{}s", state.remaining_seconds)));
        control = Some(Control { label: "Stop Wash", action: Action::StopWash });
    }
    SubsystemFragment { title: "Wash Timer", rows, control }
}

pub fn weight_drop(state: &WeightDropState) -> SubsystemFragment {
    let rows = vec![
        Row::plain("Target Drop", format!("{}g", state.target_drop_grams)),
        Row::plain("Current Weight", format!("{}g", state.current_weight_grams)),
        Row::state(state.is_monitoring, "ACTIVE - Monitoring weight drop"),
    ];
    let control = state
        .is_monitoring
        .then(|| Control { label: "Stop Monitoring", action: Action::StopMonitoring });
    SubsystemFragment { title: "Weight Drop Monitoring", rows, control }
}

pub fn schedule(kind: ScheduleKind, times: &[ScheduledTime]) -> ScheduleFragment {
    if times.is_empty() {
        return ScheduleFragment::Empty { message: kind.empty_message() };
    }
    let entries = times
        .iter()
        .map(|time| ScheduleEntry {
            time: time.clone(),
            remove: Control { label: "Remove", action: Action::RemoveScheduled(kind, time.clone()) },
        })
        .collect();
    ScheduleFragment::Listed { title: kind.list_title(), entries }
}

pub fn schedule_failed(kind: ScheduleKind) -> ScheduleFragment {
    ScheduleFragment::Failed { message: kind.error_message() }
}

pub fn status(text: &str) -> StatusFragment {
    StatusFragment { lines: text.split('\n').map(str::to_string).collect() }
}
