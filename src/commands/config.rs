//! Page Configuration
//!
//! An optional `<script id="panel-config" type="application/json">` block in
//! `index.html` overrides the defaults (device address, poll periods).

use feeder_engine::PanelConfig;
use log::{info, warn};

const CONFIG_ELEMENT_ID: &str = "panel-config";

pub fn load_config() -> PanelConfig {
    let embedded = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match embedded {
        Some(json) if !json.trim().is_empty() => match PanelConfig::from_json(&json) {
            Ok(config) => {
                info!("Loaded panel config from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(e) => {
                warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                PanelConfig::default()
            }
        },
        _ => PanelConfig::default(),
    }
}
