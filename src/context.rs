//! Application Context
//!
//! Shared panel handle provided via Leptos Context API.

use std::sync::Arc;

use feeder_engine::{Action, Panel};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{BrowserOperator, BrowserRuntime, FetchTransport};
use crate::store::StoreView;

pub type BrowserPanel = Panel<FetchTransport, BrowserOperator, StoreView, BrowserRuntime>;

/// Panel handle provided to every component
#[derive(Clone)]
pub struct PanelContext {
    panel: Arc<BrowserPanel>,
}

impl PanelContext {
    pub fn new(panel: Arc<BrowserPanel>) -> Self {
        Self { panel }
    }

    /// Run an operator action in the background
    pub fn dispatch(&self, action: Action) {
        let panel = Arc::clone(&self.panel);
        spawn_local(async move {
            panel.dispatch(action).await;
        });
    }
}

pub fn use_panel() -> PanelContext {
    expect_context::<PanelContext>()
}
