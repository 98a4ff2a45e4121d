//! Domain Layer
//!
//! Snapshots of device state and the commands an operator can send.
//! This layer has NO transport or UI dependencies (except serde for decoding).

mod command;
mod error;
mod phone;
mod schedule;
mod wash_timer;
mod weight_drop;

pub use command::{Command, Refresh};
pub use error::{PanelError, PanelResult, ValidationError};
pub use phone::{extract_phone, PhoneNumber};
pub use schedule::{ScheduleKind, ScheduledTime};
pub use wash_timer::{WashDuration, WashTimerState};
pub use weight_drop::{WeightDrop, WeightDropState};
