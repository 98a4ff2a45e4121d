//! Status Panel Component
//!
//! The device's aggregate status text, one line per row.

use leptos::prelude::*;

use crate::store::{use_panel_store, PanelStateStoreFields};

#[component]
pub fn StatusPanel() -> impl IntoView {
    let store = use_panel_store();

    view! {
        <div id="status" class="status-text">
            {move || match store.status().get() {
                None => view! { <span class="placeholder">"Loading status..."</span> }.into_any(),
                Some(fragment) => fragment
                    .lines
                    .into_iter()
                    .enumerate()
                    .map(|(i, line)| view! {
                        <span class="status-line">
                            {(i > 0).then(|| view! { <br /> })}
                            {line}
                        </span>
                    })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
