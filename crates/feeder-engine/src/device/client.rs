//! Device Client
//!
//! Typed calls on top of a [`DeviceTransport`]. Text endpoints hand back the
//! body whatever the status; JSON endpoints insist on a 2xx and a decodable
//! body.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{DeviceRequest, DeviceTransport, Endpoint};
use crate::domain::{Command, PanelError, PanelResult, ScheduleKind, ScheduledTime, WashTimerState, WeightDropState};

pub struct DeviceClient<T> {
    transport: T,
}

impl<T: DeviceTransport> DeviceClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POST a command and return the device's acknowledgement text
    pub async fn execute(&self, command: &Command) -> PanelResult<String> {
        self.text(DeviceRequest::from(command)).await
    }

    /// Multi-line aggregate status
    pub async fn status(&self) -> PanelResult<String> {
        self.text(DeviceRequest::get(Endpoint::Status)).await
    }

    pub async fn wash_timer(&self) -> PanelResult<WashTimerState> {
        self.json(Endpoint::GetWashDuration).await
    }

    pub async fn weight_drop(&self) -> PanelResult<WeightDropState> {
        self.json(Endpoint::GetWeightDrop).await
    }

    /// Anything other than a JSON array (`null`, `{}`) counts as an empty schedule
    pub async fn schedule(&self, kind: ScheduleKind) -> PanelResult<Vec<ScheduledTime>> {
        let endpoint = Endpoint::schedule_list(kind);
        let listing: Value = self.json(endpoint).await?;
        if !listing.is_array() {
            debug!("{} returned no list: {}", endpoint.path(), listing);
            return Ok(Vec::new());
        }
        serde_json::from_value(listing).map_err(|e| PanelError::Decode(format!("{}: {}", endpoint.path(), e)))
    }

    async fn text(&self, request: DeviceRequest) -> PanelResult<String> {
        let path = request.path();
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            warn!("{} answered HTTP {}", path, response.status);
        }
        Ok(response.body)
    }

    async fn json<D: DeserializeOwned>(&self, endpoint: Endpoint) -> PanelResult<D> {
        let response = self.transport.send(DeviceRequest::get(endpoint)).await?;
        if !response.is_success() {
            return Err(PanelError::Http { status: response.status, path: endpoint.path() });
        }
        serde_json::from_str(&response.body).map_err(|e| PanelError::Decode(format!("{}: {}", endpoint.path(), e)))
    }
}
