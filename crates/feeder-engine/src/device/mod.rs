//! Device Layer
//!
//! The HTTP surface of the feeder and a typed client over it.
//! Implementations of the transport can use browser fetch, in-memory, etc.

mod client;
mod endpoint;
mod request;
mod traits;

pub use client::DeviceClient;
pub use endpoint::{Endpoint, Method};
pub use request::{DeviceRequest, DeviceResponse, FormBody, FORM_CONTENT_TYPE};
pub use traits::DeviceTransport;
