//! Panel Layer - Core Traits
//!
//! The seams between the engine and whatever hosts it.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use super::render::{ScheduleFragment, StatusFragment, SubsystemFragment};
use crate::domain::{PhoneNumber, ScheduleKind};

/// Named render targets.
///
/// Every call replaces the whole target with a fresh fragment. A target that
/// is never called keeps whatever it showed last.
pub trait PanelView {
    fn show_status(&self, fragment: StatusFragment);
    fn show_wash_timer(&self, fragment: SubsystemFragment);
    fn show_weight_drop(&self, fragment: SubsystemFragment);
    fn show_schedule(&self, kind: ScheduleKind, fragment: ScheduleFragment);
    /// Fill the phone input; only used once at startup
    fn seed_phone(&self, number: PhoneNumber);
}

/// The human at the controls
pub trait Operator {
    /// Blocking yes/no question. `false` aborts the action.
    fn confirm(&self, prompt: &str) -> bool;
    /// Blocking acknowledgement of a result, an error or a validation problem
    fn notify(&self, message: &str);
}

/// A unit of work on the single-threaded event loop
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Cooperative event loop hosting the pollers
pub trait TaskRuntime {
    /// Run a task to completion alongside everything else; never awaited
    fn spawn(&self, task: LocalTask);
    fn sleep(&self, duration: Duration) -> LocalTask;
}
