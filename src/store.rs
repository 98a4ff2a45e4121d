//! Panel State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every field is one
//! render target and has exactly one writer.

use feeder_engine::{PanelView, PhoneNumber, ScheduleFragment, ScheduleKind, StatusFragment, SubsystemFragment};
use leptos::prelude::*;
use reactive_stores::Store;

/// Latest fragment per target; `None` until the first successful poll
#[derive(Clone, Debug, Default, Store)]
pub struct PanelState {
    /// Aggregate status text
    pub status: Option<StatusFragment>,
    pub wash_timer: Option<SubsystemFragment>,
    pub weight_drop: Option<SubsystemFragment>,
    pub feed_schedule: Option<ScheduleFragment>,
    pub wash_schedule: Option<ScheduleFragment>,
    /// Phone input contents: seeded once from status, then the operator's
    pub phone_input: String,
}

/// Type alias for the store
pub type PanelStore = Store<PanelState>;

/// Get the panel store from context
pub fn use_panel_store() -> PanelStore {
    expect_context::<PanelStore>()
}

/// Reactive view of one schedule list
pub fn schedule_signal(store: PanelStore, kind: ScheduleKind) -> Signal<Option<ScheduleFragment>> {
    Signal::derive(move || match kind {
        ScheduleKind::Feed => store.feed_schedule().get(),
        ScheduleKind::Wash => store.wash_schedule().get(),
    })
}

/// The engine's render targets, backed by the store
#[derive(Clone, Copy)]
pub struct StoreView {
    store: PanelStore,
}

impl StoreView {
    pub fn new(store: PanelStore) -> Self {
        Self { store }
    }
}

impl PanelView for StoreView {
    fn show_status(&self, fragment: StatusFragment) {
        *self.store.status().write() = Some(fragment);
    }

    fn show_wash_timer(&self, fragment: SubsystemFragment) {
        *self.store.wash_timer().write() = Some(fragment);
    }

    fn show_weight_drop(&self, fragment: SubsystemFragment) {
        *self.store.weight_drop().write() = Some(fragment);
    }

    fn show_schedule(&self, kind: ScheduleKind, fragment: ScheduleFragment) {
        match kind {
            ScheduleKind::Feed => *self.store.feed_schedule().write() = Some(fragment),
            ScheduleKind::Wash => *self.store.wash_schedule().write() = Some(fragment),
        }
    }

    fn seed_phone(&self, number: PhoneNumber) {
        *self.store.phone_input().write() = number.to_string();
    }
}
