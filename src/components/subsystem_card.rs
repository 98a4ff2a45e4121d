//! Subsystem Card Component
//!
//! Wash timer / weight drop status. The stop button only exists while the
//! fragment carries one.

use feeder_engine::{SubsystemFragment, Tone};
use leptos::prelude::*;

use super::ActionButton;

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Plain => "value",
        Tone::Active => "value active",
        Tone::Idle => "value idle",
    }
}

#[component]
pub fn SubsystemCard(fragment: Signal<Option<SubsystemFragment>>, placeholder: &'static str) -> impl IntoView {
    move || match fragment.get() {
        None => view! { <p class="placeholder">{placeholder}</p> }.into_any(),
        Some(fragment) => view! {
            <div class="status-card">
                <h3>{fragment.title}</h3>
                {fragment.rows.into_iter().map(|row| view! {
                    <p>
                        <strong>{row.label}":"</strong>
                        " "
                        <span class=tone_class(row.tone)>{row.value}</span>
                    </p>
                }).collect_view()}
                {fragment.control.map(|control| view! {
                    <ActionButton label=control.label action=control.action class="stop-btn" />
                })}
            </div>
        }.into_any(),
    }
}
