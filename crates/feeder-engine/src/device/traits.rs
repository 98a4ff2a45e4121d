//! Device Layer - Core Traits

use async_trait::async_trait;

use super::{DeviceRequest, DeviceResponse};
use crate::domain::PanelResult;

/// One HTTP round trip to the device.
///
/// Returns `PanelError::Network` when no response arrives at all; any status
/// code that does arrive is handed back untouched. Single attempt, no retry.
#[async_trait(?Send)]
pub trait DeviceTransport {
    async fn send(&self, request: DeviceRequest) -> PanelResult<DeviceResponse>;
}
