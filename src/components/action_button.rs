//! Action Button Component
//!
//! A button that dispatches one fixed action.

use feeder_engine::Action;
use leptos::prelude::*;

use crate::context::use_panel;

/// Button bound to a single action
///
/// # Arguments
/// * `label` - Button text
/// * `action` - Dispatched on every click; confirmation, if any, is asked by the panel
/// * `class` - CSS class (e.g. "stop-btn" or "remove-btn")
#[component]
pub fn ActionButton(
    label: &'static str,
    action: Action,
    #[prop(default = "action-btn")] class: &'static str,
) -> impl IntoView {
    let ctx = use_panel();

    view! {
        <button class=class on:click=move |_| ctx.dispatch(action.clone())>
            {label}
        </button>
    }
}
