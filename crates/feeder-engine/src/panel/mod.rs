//! Panel Layer
//!
//! Turns operator actions into device commands and device snapshots into
//! render fragments. Each render target is written by exactly one poller.

mod action;
mod controller;
mod dispatcher;
mod pollers;
mod render;
pub mod sequencer;
mod traits;

pub use action::Action;
pub use controller::Panel;
pub use dispatcher::DispatchOutcome;
pub use render::{Control, Row, ScheduleEntry, ScheduleFragment, StatusFragment, SubsystemFragment, Tone};
pub use traits::{LocalTask, Operator, PanelView, TaskRuntime};
