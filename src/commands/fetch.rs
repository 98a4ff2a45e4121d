//! Fetch Transport
//!
//! `window.fetch` bound to the device's HTTP API.

use async_trait::async_trait;
use feeder_engine::device::FORM_CONTENT_TYPE;
use feeder_engine::{DeviceRequest, DeviceResponse, DeviceTransport, PanelError, PanelResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Talks to the device at `base_url` (empty = the origin serving the page)
#[derive(Debug, Clone)]
pub struct FetchTransport {
    base_url: String,
}

impl FetchTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }
}

fn js_error(err: JsValue) -> PanelError {
    PanelError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

#[async_trait(?Send)]
impl DeviceTransport for FetchTransport {
    async fn send(&self, request: DeviceRequest) -> PanelResult<DeviceResponse> {
        let window = web_sys::window().ok_or_else(|| PanelError::Network("no window".to_string()))?;

        let init = RequestInit::new();
        init.set_method(request.method().as_str());
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(&body.encode()));
        }

        let url = format!("{}{}", self.base_url, request.path());
        let js_request = Request::new_with_str_and_init(&url, &init).map_err(js_error)?;
        if request.body.is_some() {
            js_request.headers().set("Content-Type", FORM_CONTENT_TYPE).map_err(js_error)?;
        }

        let value = JsFuture::from(window.fetch_with_request(&js_request)).await.map_err(js_error)?;
        let response: Response = value.dyn_into().map_err(js_error)?;
        let text = JsFuture::from(response.text().map_err(js_error)?).await.map_err(js_error)?;

        Ok(DeviceResponse { status: response.status(), body: text.as_string().unwrap_or_default() })
    }
}
