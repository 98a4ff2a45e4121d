//! Quick Actions Component

use feeder_engine::Action;
use leptos::prelude::*;

use super::ActionButton;

/// Parameterless one-shot commands
#[component]
pub fn QuickActions() -> impl IntoView {
    view! {
        <div class="quick-actions">
            <ActionButton label="Feed Now" action=Action::Feed />
            <ActionButton label="Wash Now" action=Action::Wash />
            <ActionButton label="Tare Scale" action=Action::Tare />
        </div>
    }
}
