//! Browser Event Loop
//!
//! Tasks run via `spawn_local` on the page's microtask queue; sleeps are
//! `setTimeout` through gloo.

use std::time::Duration;

use feeder_engine::{LocalTask, TaskRuntime};
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRuntime;

impl TaskRuntime for BrowserRuntime {
    fn spawn(&self, task: LocalTask) {
        spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalTask {
        Box::pin(gloo_timers::future::sleep(duration))
    }
}
