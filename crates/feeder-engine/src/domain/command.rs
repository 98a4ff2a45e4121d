//! Device Commands
//!
//! Validated instructions for the device, and which views have to be
//! re-fetched once the device has accepted one.

use super::{PhoneNumber, ScheduleKind, ScheduledTime, WashDuration, WeightDrop};

/// A command ready to be posted. Every payload here has passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Feed,
    Wash,
    Tare,
    StopWash,
    StopMonitoring,
    SetWashDuration(WashDuration),
    SetWeightDrop(WeightDrop),
    AddTime(ScheduleKind, ScheduledTime),
    RemoveTime(ScheduleKind, ScheduledTime),
    SetPhone(PhoneNumber),
    SendSms(String),
}

/// A piece of remote state with its own render target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Refresh {
    Status,
    WashTimer,
    WeightDrop,
    Schedule(ScheduleKind),
}

impl Refresh {
    /// Everything that polls on a timer, in initial-load order
    pub const PERIODIC: [Refresh; 5] = [
        Refresh::Schedule(ScheduleKind::Feed),
        Refresh::Schedule(ScheduleKind::Wash),
        Refresh::Status,
        Refresh::WeightDrop,
        Refresh::WashTimer,
    ];
}

impl Command {
    /// Views to reload after the device acknowledges this command
    pub fn refreshes(&self) -> Vec<Refresh> {
        match self {
            Command::Feed | Command::Tare => vec![Refresh::Status, Refresh::WeightDrop],
            Command::Wash | Command::StopWash => vec![Refresh::Status, Refresh::WashTimer],
            Command::SetWashDuration(_) => vec![Refresh::WashTimer, Refresh::Status],
            Command::SetWeightDrop(_) | Command::StopMonitoring => vec![Refresh::WeightDrop, Refresh::Status],
            Command::AddTime(kind, _) | Command::RemoveTime(kind, _) => {
                vec![Refresh::Schedule(*kind), Refresh::Status]
            }
            Command::SetPhone(_) | Command::SendSms(_) => vec![Refresh::Status],
        }
    }
}
