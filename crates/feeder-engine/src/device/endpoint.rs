//! Endpoint Table
//!
//! Every route the feeder firmware serves.

use crate::domain::{Command, ScheduleKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Feed,
    Wash,
    StopWash,
    SetWashDuration,
    GetWashDuration,
    Tare,
    SetWeightDrop,
    StopMonitoring,
    GetWeightDrop,
    AddFeed,
    RemoveFeed,
    GetFeedTimes,
    AddWash,
    RemoveWash,
    GetWashTimes,
    SetPhone,
    SendSms,
    Status,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Feed => "/feed",
            Endpoint::Wash => "/wash",
            Endpoint::StopWash => "/stopWash",
            Endpoint::SetWashDuration => "/setWashDuration",
            Endpoint::GetWashDuration => "/getWashDuration",
            Endpoint::Tare => "/tare",
            Endpoint::SetWeightDrop => "/setWeightDrop",
            Endpoint::StopMonitoring => "/stopMonitoring",
            Endpoint::GetWeightDrop => "/getWeightDrop",
            Endpoint::AddFeed => "/addFeed",
            Endpoint::RemoveFeed => "/removeFeed",
            Endpoint::GetFeedTimes => "/getFeedTimes",
            Endpoint::AddWash => "/addWash",
            Endpoint::RemoveWash => "/removeWash",
            Endpoint::GetWashTimes => "/getWashTimes",
            Endpoint::SetPhone => "/setPhone",
            Endpoint::SendSms => "/sendSMS",
            Endpoint::Status => "/status",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::GetWashDuration
            | Endpoint::GetWeightDrop
            | Endpoint::GetFeedTimes
            | Endpoint::GetWashTimes
            | Endpoint::Status => Method::Get,
            _ => Method::Post,
        }
    }

    pub fn schedule_list(kind: ScheduleKind) -> Self {
        match kind {
            ScheduleKind::Feed => Endpoint::GetFeedTimes,
            ScheduleKind::Wash => Endpoint::GetWashTimes,
        }
    }

    /// Route a validated command to its POST endpoint
    pub fn for_command(command: &Command) -> Self {
        match command {
            Command::Feed => Endpoint::Feed,
            Command::Wash => Endpoint::Wash,
            Command::Tare => Endpoint::Tare,
            Command::StopWash => Endpoint::StopWash,
            Command::StopMonitoring => Endpoint::StopMonitoring,
            Command::SetWashDuration(_) => Endpoint::SetWashDuration,
            Command::SetWeightDrop(_) => Endpoint::SetWeightDrop,
            Command::AddTime(ScheduleKind::Feed, _) => Endpoint::AddFeed,
            Command::AddTime(ScheduleKind::Wash, _) => Endpoint::AddWash,
            Command::RemoveTime(ScheduleKind::Feed, _) => Endpoint::RemoveFeed,
            Command::RemoveTime(ScheduleKind::Wash, _) => Endpoint::RemoveWash,
            Command::SetPhone(_) => Endpoint::SetPhone,
            Command::SendSms(_) => Endpoint::SendSms,
        }
    }
}
