//! Pet Feeder Control App
//!
//! Main application component: wires the engine to the page and lays out
//! the control sections.

use std::sync::Arc;

use feeder_engine::{sequencer, Action, Panel, ScheduleKind};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::{self, BrowserOperator, BrowserRuntime, FetchTransport};
use crate::components::{PhoneForm, QuickActions, ScheduleForm, ScheduleList, SettingForm, StatusPanel, SubsystemCard};
use crate::context::PanelContext;
use crate::store::{PanelState, PanelStateStoreFields, StoreView};

#[component]
pub fn App() -> impl IntoView {
    let config = commands::load_config();
    let store = Store::new(PanelState::default());
    provide_context(store);

    let transport = FetchTransport::new(config.base_url.clone());
    let panel = Arc::new(Panel::new(config, transport, BrowserOperator, StoreView::new(store), BrowserRuntime));
    provide_context(PanelContext::new(Arc::clone(&panel)));

    // Start polling once mounted
    Effect::new(move |_| sequencer::start(&panel));

    let wash_timer = Signal::derive(move || store.wash_timer().get());
    let weight_drop = Signal::derive(move || store.weight_drop().get());

    view! {
        <main class="panel-layout">
            <h1>"Pet Feeder Control"</h1>

            <section class="card">
                <h2>"Quick Actions"</h2>
                <QuickActions />
            </section>

            <section class="card">
                <h2>"Wash Timer"</h2>
                <SettingForm
                    label="Wash duration (seconds)"
                    placeholder="1-3600"
                    button="Set Duration"
                    action=Action::SetWashDuration
                />
                <SubsystemCard fragment=wash_timer placeholder="Loading wash timer..." />
            </section>

            <section class="card">
                <h2>"Weight Drop"</h2>
                <SettingForm
                    label="Target drop (grams)"
                    placeholder="0"
                    button="Set Target"
                    action=Action::SetWeightDrop
                />
                <SubsystemCard fragment=weight_drop placeholder="Loading weight drop..." />
            </section>

            <section class="card">
                <h2>"Feed Schedule"</h2>
                <ScheduleForm kind=ScheduleKind::Feed />
                <ScheduleList kind=ScheduleKind::Feed />
            </section>

            <section class="card">
                <h2>"Wash Schedule"</h2>
                <ScheduleForm kind=ScheduleKind::Wash />
                <ScheduleList kind=ScheduleKind::Wash />
            </section>

            <section class="card">
                <h2>"SMS Alerts"</h2>
                <PhoneForm />
            </section>

            <section class="card">
                <h2>"Status"</h2>
                <StatusPanel />
            </section>
        </main>
    }
}
