//! Feeder Engine
//!
//! Command dispatch and polling engine behind the pet feeder control panel.
//!
//! Layered architecture:
//! - domain: device state snapshots, operator commands, validation
//! - device: HTTP endpoint table, transport trait and typed client
//! - panel: render functions, dispatcher, pollers and the startup sequencer
//!
//! Nothing here touches the browser directly. The frontend supplies a
//! [`DeviceTransport`], an [`Operator`], a [`PanelView`] and a
//! [`TaskRuntime`]; the tests supply in-memory versions of the same.

pub mod config;
pub mod device;
pub mod domain;
pub mod panel;

#[cfg(test)]
mod test_support;

pub use config::PanelConfig;
pub use device::{DeviceClient, DeviceRequest, DeviceResponse, DeviceTransport, Endpoint, FormBody, Method};
pub use domain::{
    extract_phone, Command, PanelError, PanelResult, PhoneNumber, Refresh, ScheduleKind, ScheduledTime,
    ValidationError, WashDuration, WashTimerState, WeightDrop, WeightDropState,
};
pub use panel::{
    sequencer, Action, Control, DispatchOutcome, LocalTask, Operator, Panel, PanelView, Row, ScheduleEntry,
    ScheduleFragment, StatusFragment, SubsystemFragment, TaskRuntime, Tone,
};
