//! Setting Form Component
//!
//! Numeric input plus a submit button. The raw text goes to the panel, which
//! validates it.

use feeder_engine::Action;
use leptos::prelude::*;

use crate::context::use_panel;

#[component]
pub fn SettingForm(
    label: &'static str,
    placeholder: &'static str,
    button: &'static str,
    /// Builds the action from the raw field contents
    action: fn(String) -> Action,
) -> impl IntoView {
    let ctx = use_panel();
    let (value, set_value) = signal(String::new());

    view! {
        <div class="setting-row">
            <label>
                {label}
                " "
                <input
                    type="number"
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                />
            </label>
            <button on:click=move |_| ctx.dispatch(action(value.get_untracked()))>
                {button}
            </button>
        </div>
    }
}
