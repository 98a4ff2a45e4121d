//! Panel Controller
//!
//! Owns the device client and the host seams. Shared as `Arc<Panel>` between
//! the UI and every polling task.

use std::sync::Arc;

use log::debug;

use super::{Operator, PanelView, TaskRuntime};
use crate::config::PanelConfig;
use crate::device::{DeviceClient, DeviceTransport};
use crate::domain::Refresh;

pub struct Panel<T, O, V, R> {
    config: PanelConfig,
    client: DeviceClient<T>,
    operator: O,
    view: V,
    runtime: R,
}

impl<T, O, V, R> Panel<T, O, V, R>
where
    T: DeviceTransport + 'static,
    O: Operator + 'static,
    V: PanelView + 'static,
    R: TaskRuntime + 'static,
{
    pub fn new(config: PanelConfig, transport: T, operator: O, view: V, runtime: R) -> Self {
        Self { config, client: DeviceClient::new(transport), operator, view, runtime }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn client(&self) -> &DeviceClient<T> {
        &self.client
    }

    pub fn operator(&self) -> &O {
        &self.operator
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Run one refresh as its own task so a hung request stalls nothing else
    pub fn spawn_refresh(self: &Arc<Self>, refresh: Refresh) {
        debug!("Spawning refresh {:?}", refresh);
        let panel = Arc::clone(self);
        self.runtime.spawn(Box::pin(async move { panel.refresh(refresh).await }));
    }
}
