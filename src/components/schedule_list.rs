//! Schedule List Component
//!
//! The device's current list for one schedule, each entry with its own
//! remove button.

use feeder_engine::{ScheduleFragment, ScheduleKind};
use leptos::prelude::*;

use super::ActionButton;
use crate::store::{schedule_signal, use_panel_store};

#[component]
pub fn ScheduleList(kind: ScheduleKind) -> impl IntoView {
    let fragment = schedule_signal(use_panel_store(), kind);

    move || match fragment.get() {
        None => view! { <p class="placeholder">"Loading..."</p> }.into_any(),
        Some(ScheduleFragment::Listed { title, entries }) => view! {
            <div class="schedule-list">
                <h3>{title}</h3>
                <ul>
                    {entries.into_iter().map(|entry| view! {
                        <li>
                            {entry.time.to_string()}
                            " "
                            <ActionButton label=entry.remove.label action=entry.remove.action class="remove-btn" />
                        </li>
                    }).collect_view()}
                </ul>
            </div>
        }.into_any(),
        Some(ScheduleFragment::Empty { message }) => view! { <p class="empty">{message}</p> }.into_any(),
        Some(ScheduleFragment::Failed { message }) => view! { <p class="error">{message}</p> }.into_any(),
    }
}
