//! Initialization Sequencer
//!
//! Startup order: phone seeding right away, the full first load after a short
//! delay, and one free-running timer per polled view. Nothing waits on
//! anything else; overlapping fetches are expected.

use std::sync::Arc;

use log::{debug, info};

use super::{Operator, Panel, PanelView, TaskRuntime};
use crate::device::DeviceTransport;
use crate::domain::Refresh;

pub fn start<T, O, V, R>(panel: &Arc<Panel<T, O, V, R>>)
where
    T: DeviceTransport + 'static,
    O: Operator + 'static,
    V: PanelView + 'static,
    R: TaskRuntime + 'static,
{
    info!("Initializing pet feeder control...");

    let initial = Arc::clone(panel);
    panel.runtime().spawn(Box::pin(async move {
        initial.runtime().sleep(initial.config().initial_load_delay()).await;
        debug!("Running initial load");
        for refresh in Refresh::PERIODIC {
            initial.spawn_refresh(refresh);
        }
    }));

    let seeding = Arc::clone(panel);
    panel.runtime().spawn(Box::pin(async move { seeding.seed_phone().await }));

    for refresh in Refresh::PERIODIC {
        let period = panel.config().cadence(refresh);
        let ticker = Arc::clone(panel);
        panel.runtime().spawn(Box::pin(async move {
            loop {
                ticker.runtime().sleep(period).await;
                // spawned, not awaited: a hung request must not hold back the next tick
                ticker.spawn_refresh(refresh);
            }
        }));
    }

    info!("Pet feeder control initialized");
}
