//! Operator Actions
//!
//! What the operator asked for, before confirmation and validation.

use crate::config::PanelConfig;
use crate::domain::{
    Command, PhoneNumber, ScheduleKind, ScheduledTime, ValidationError, WashDuration, WeightDrop,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Feed,
    Wash,
    Tare,
    StopWash,
    StopMonitoring,
    /// Raw contents of the duration field
    SetWashDuration(String),
    /// Raw contents of the weight field
    SetWeightDrop(String),
    /// Time picker + Add button
    AddTime(ScheduleKind, String),
    /// Time picker + Remove button
    RemoveTime(ScheduleKind, String),
    /// Remove button next to a listed time
    RemoveScheduled(ScheduleKind, ScheduledTime),
    SetPhone(String),
    SendTestSms,
}

impl Action {
    /// Question to ask before a destructive action
    pub fn confirmation(&self) -> Option<String> {
        match self {
            Action::StopWash => Some("Stop wash operation?".to_string()),
            Action::StopMonitoring => Some("Stop weight drop monitoring?".to_string()),
            Action::RemoveScheduled(kind, time) => Some(format!("Remove {} time {}?", kind.noun(), time)),
            _ => None,
        }
    }

    pub fn into_command(self, config: &PanelConfig) -> Result<Command, ValidationError> {
        let command = match self {
            Action::Feed => Command::Feed,
            Action::Wash => Command::Wash,
            Action::Tare => Command::Tare,
            Action::StopWash => Command::StopWash,
            Action::StopMonitoring => Command::StopMonitoring,
            Action::SetWashDuration(raw) => Command::SetWashDuration(WashDuration::parse(&raw)?),
            Action::SetWeightDrop(raw) => Command::SetWeightDrop(WeightDrop::parse(&raw)?),
            Action::AddTime(kind, raw) => Command::AddTime(kind, ScheduledTime::parse(&raw)?),
            Action::RemoveTime(kind, raw) => Command::RemoveTime(kind, ScheduledTime::parse(&raw)?),
            Action::RemoveScheduled(kind, time) => Command::RemoveTime(kind, time),
            Action::SetPhone(raw) => Command::SetPhone(PhoneNumber::parse(&raw)?),
            Action::SendTestSms => Command::SendSms(config.test_sms_message.clone()),
        };
        Ok(command)
    }
}
