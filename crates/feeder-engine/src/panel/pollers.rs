//! Pollers
//!
//! One fetch-and-render pass per render target. Each pass is its own error
//! boundary: failures are logged, never shown to the operator, and the target
//! keeps its last good render. Schedule lists are the exception and switch to
//! their error placeholder.

use log::{debug, error, warn};

use super::{render, Operator, Panel, PanelView, TaskRuntime};
use crate::device::DeviceTransport;
use crate::domain::{extract_phone, Refresh, ScheduleKind};

impl<T, O, V, R> Panel<T, O, V, R>
where
    T: DeviceTransport + 'static,
    O: Operator + 'static,
    V: PanelView + 'static,
    R: TaskRuntime + 'static,
{
    pub async fn refresh(&self, refresh: Refresh) {
        match refresh {
            Refresh::Status => self.refresh_status().await,
            Refresh::WashTimer => self.refresh_wash_timer().await,
            Refresh::WeightDrop => self.refresh_weight_drop().await,
            Refresh::Schedule(kind) => self.load_times(kind).await,
        }
    }

    pub async fn refresh_status(&self) {
        match self.client().status().await {
            Ok(text) => self.view().show_status(render::status(&text)),
            Err(err) => warn!("Error fetching status: {}", err),
        }
    }

    pub async fn refresh_wash_timer(&self) {
        match self.client().wash_timer().await {
            Ok(state) => self.view().show_wash_timer(render::wash_timer(&state)),
            Err(err) => warn!("Error updating wash timer status: {}", err),
        }
    }

    pub async fn refresh_weight_drop(&self) {
        match self.client().weight_drop().await {
            Ok(state) => self.view().show_weight_drop(render::weight_drop(&state)),
            Err(err) => warn!("Error updating weight drop status: {}", err),
        }
    }

    pub async fn load_times(&self, kind: ScheduleKind) {
        let fragment = match self.client().schedule(kind).await {
            Ok(times) => render::schedule(kind, &times),
            Err(err) => {
                error!("Error loading {} times: {}", kind.noun(), err);
                render::schedule_failed(kind)
            }
        };
        self.view().show_schedule(kind, fragment);
    }

    /// Fill the phone field from the status text. Startup only.
    pub async fn seed_phone(&self) {
        match self.client().status().await {
            Ok(text) => match extract_phone(&text) {
                Some(number) => self.view().seed_phone(number),
                None => debug!("No phone number configured on device"),
            },
            Err(err) => warn!("Error loading phone number: {}", err),
        }
    }
}
