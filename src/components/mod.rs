//! UI Components
//!
//! Reusable Leptos components. Cards and lists only read the store; buttons
//! hand actions to the panel.

mod action_button;
mod phone_form;
mod quick_actions;
mod schedule_form;
mod schedule_list;
mod setting_form;
mod status_panel;
mod subsystem_card;

pub use action_button::ActionButton;
pub use phone_form::PhoneForm;
pub use quick_actions::QuickActions;
pub use schedule_form::ScheduleForm;
pub use schedule_list::ScheduleList;
pub use setting_form::SettingForm;
pub use status_panel::StatusPanel;
pub use subsystem_card::SubsystemCard;
