//! Schedule Form Component
//!
//! Time picker with Add / Remove for one schedule.

use feeder_engine::{Action, ScheduleKind};
use leptos::prelude::*;

use crate::context::use_panel;

#[component]
pub fn ScheduleForm(kind: ScheduleKind) -> impl IntoView {
    let ctx = use_panel();
    let remove_ctx = ctx.clone();
    let (time, set_time) = signal(String::new());

    view! {
        <div class="schedule-form">
            <input
                type="time"
                prop:value=move || time.get()
                on:input=move |ev| set_time.set(event_target_value(&ev))
            />
            <button on:click=move |_| ctx.dispatch(Action::AddTime(kind, time.get_untracked()))>
                "Add"
            </button>
            <button on:click=move |_| remove_ctx.dispatch(Action::RemoveTime(kind, time.get_untracked()))>
                "Remove"
            </button>
        </div>
    }
}
