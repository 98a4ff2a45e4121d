//! Dialog Commands
//!
//! Native `alert` / `confirm` as the operator seam. Both block the page, which
//! is how every command result is acknowledged.

use feeder_engine::Operator;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOperator;

impl Operator for BrowserOperator {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
