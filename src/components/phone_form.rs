//! Phone Form Component
//!
//! Alert number input plus the test-message button. The input is seeded from
//! the device status at startup.

use feeder_engine::Action;
use leptos::prelude::*;

use super::ActionButton;
use crate::context::use_panel;
use crate::store::{use_panel_store, PanelStateStoreFields};

#[component]
pub fn PhoneForm() -> impl IntoView {
    let ctx = use_panel();
    let store = use_panel_store();

    view! {
        <div class="phone-form">
            <input
                type="tel"
                placeholder="+15551234567"
                prop:value=move || store.phone_input().get()
                on:input=move |ev| {
                    *store.phone_input().write() = event_target_value(&ev);
                }
            />
            <button on:click=move |_| ctx.dispatch(Action::SetPhone(store.phone_input().get_untracked()))>
                "Save Number"
            </button>
            <ActionButton label="Send Test SMS" action=Action::SendTestSms />
        </div>
    }
}
