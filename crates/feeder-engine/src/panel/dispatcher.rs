//! Command Dispatcher
//!
//! confirm -> validate -> post -> acknowledge -> refresh dependents.

use std::sync::Arc;

use log::{debug, info, warn};

use super::{Action, Operator, Panel, PanelView, TaskRuntime};
use crate::device::{DeviceTransport, Endpoint};
use crate::domain::{PanelError, ValidationError};

/// How an operator action ended
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// Operator said no; nothing was sent
    Declined,
    /// Input failed local validation; nothing was sent
    Rejected(ValidationError),
    /// Device replied; carries its acknowledgement text
    Acknowledged(String),
    Failed(PanelError),
}

impl<T, O, V, R> Panel<T, O, V, R>
where
    T: DeviceTransport + 'static,
    O: Operator + 'static,
    V: PanelView + 'static,
    R: TaskRuntime + 'static,
{
    pub async fn dispatch(self: &Arc<Self>, action: Action) -> DispatchOutcome {
        if let Some(prompt) = action.confirmation() {
            if !self.operator().confirm(&prompt) {
                debug!("Operator declined: {}", prompt);
                return DispatchOutcome::Declined;
            }
        }

        let command = match action.into_command(self.config()) {
            Ok(command) => command,
            Err(err) => {
                debug!("Rejected input: {}", err);
                self.operator().notify(&err.to_string());
                return DispatchOutcome::Rejected(err);
            }
        };

        let path = Endpoint::for_command(&command).path();
        info!("Sending {}", path);
        match self.client().execute(&command).await {
            Ok(reply) => {
                self.operator().notify(&reply);
                for refresh in command.refreshes() {
                    self.spawn_refresh(refresh);
                }
                DispatchOutcome::Acknowledged(reply)
            }
            Err(err) => {
                warn!("{} failed: {}", path, err);
                self.operator().notify(&format!("Error: {}", err));
                DispatchOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ScheduleKind, ScheduledTime};
    use crate::panel::ScheduleFragment;
    use crate::test_support::{run_local, test_panel, MockDevice, Rendered};

    #[tokio::test]
    async fn test_valid_durations_are_sent() {
        for raw in ["1", "600", "3600"] {
            let panel = test_panel(MockDevice::new(), true);
            let outcome = run_local(panel.dispatch(Action::SetWashDuration(raw.into()))).await;

            assert_eq!(outcome, DispatchOutcome::Acknowledged("OK".into()));
            let posted = panel.client().transport().bodies_to("/setWashDuration");
            assert_eq!(posted.len(), 1);
            assert_eq!(posted[0].get("duration"), Some(raw));
        }
    }

    #[tokio::test]
    async fn test_invalid_durations_never_reach_device() {
        for raw in ["0", "-1", "3601", "ten", ""] {
            let panel = test_panel(MockDevice::new(), true);
            let outcome = run_local(panel.dispatch(Action::SetWashDuration(raw.into()))).await;

            assert_eq!(outcome, DispatchOutcome::Rejected(ValidationError::Duration));
            assert!(panel.client().transport().requests().is_empty());
            assert_eq!(
                panel.operator().notices(),
                vec!["Please enter a valid duration (1-3600 seconds)".to_string()]
            );
        }
    }

    #[tokio::test]
    async fn test_weight_validation() {
        let panel = test_panel(MockDevice::new(), true);
        run_local(panel.dispatch(Action::SetWeightDrop("0".into()))).await;
        run_local(panel.dispatch(Action::SetWeightDrop("-3".into()))).await;
        run_local(panel.dispatch(Action::SetWeightDrop(String::new()))).await;

        let posted = panel.client().transport().bodies_to("/setWeightDrop");
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].get("weight"), Some("0"));
        let weight_message = "Please enter a valid weight (grams)".to_string();
        assert_eq!(panel.operator().notices(), vec!["OK".to_string(), weight_message.clone(), weight_message]);
    }

    #[tokio::test]
    async fn test_declined_stop_sends_nothing() {
        let panel = test_panel(MockDevice::new(), false);
        assert_eq!(run_local(panel.dispatch(Action::StopWash)).await, DispatchOutcome::Declined);
        assert_eq!(run_local(panel.dispatch(Action::StopMonitoring)).await, DispatchOutcome::Declined);

        assert!(panel.client().transport().requests().is_empty());
        assert!(panel.operator().notices().is_empty());
        assert_eq!(panel.operator().prompts().len(), 2);
    }

    #[tokio::test]
    async fn test_confirmed_stop_refreshes_wash_timer() {
        let device = MockDevice::new();
        device.respond("/stopWash", 200, "Wash stopped");
        device.respond(
            "/getWashDuration",
            200,
            r#"{"washDuration":20,"isWashActive":false,"elapsedTime":0,"remainingTime":0}"#,
        );
        let panel = test_panel(device, true);

        run_local(panel.dispatch(Action::StopWash)).await;

        assert_eq!(panel.operator().notices(), vec!["Wash stopped".to_string()]);
        let device = panel.client().transport();
        assert_eq!(device.requests_to("/stopWash"), 1);
        assert_eq!(device.requests_to("/status"), 1);
        assert_eq!(device.requests_to("/getWashDuration"), 1);
        assert!(panel.view().events().iter().any(|e| matches!(e, Rendered::WashTimer(f) if f.control.is_none())));
    }

    #[tokio::test]
    async fn test_listed_remove_posts_only_its_time() {
        let device = MockDevice::new();
        device.respond("/getFeedTimes", 200, r#"["07:00","19:30"]"#);
        let panel = test_panel(device, true);

        panel.load_times(ScheduleKind::Feed).await;
        let Some(Rendered::Schedule(_, ScheduleFragment::Listed { entries, .. })) = panel.view().last() else {
            panic!("feed list not rendered");
        };
        assert_eq!(entries.len(), 2);
        let remove = entries[1].remove.action.clone();

        run_local(panel.dispatch(remove)).await;

        assert_eq!(panel.operator().prompts(), vec!["Remove feed time 19:30?".to_string()]);
        let posted = panel.client().transport().bodies_to("/removeFeed");
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].fields(), &[("time", "19:30".to_string())]);
    }

    #[tokio::test]
    async fn test_add_wash_time_end_to_end() {
        let device = MockDevice::new();
        device.respond("/addWash", 200, "Wash time added");
        device.respond("/getWashTimes", 200, r#"["06:45","18:00"]"#);
        let panel = test_panel(device, true);

        let outcome = run_local(panel.dispatch(Action::AddTime(ScheduleKind::Wash, "06:45".into()))).await;
        assert_eq!(outcome, DispatchOutcome::Acknowledged("Wash time added".into()));

        let device = panel.client().transport();
        assert_eq!(device.requests()[0].path(), "/addWash");
        assert_eq!(device.bodies_to("/addWash")[0].get("time"), Some("06:45"));
        assert_eq!(device.requests_to("/getWashTimes"), 1);
        assert_eq!(device.requests_to("/status"), 1);
        assert_eq!(device.requests().len(), 3);

        let rendered = panel.view().events();
        let Some(Rendered::Schedule(ScheduleKind::Wash, ScheduleFragment::Listed { entries, .. })) =
            rendered.iter().find(|e| matches!(e, Rendered::Schedule(..)))
        else {
            panic!("wash list not re-rendered");
        };
        let times: Vec<&ScheduledTime> = entries.iter().map(|e| &e.time).collect();
        assert_eq!(times[0].as_str(), "06:45");
        assert!(rendered.iter().any(|e| matches!(e, Rendered::Status(_))));
    }

    #[tokio::test]
    async fn test_failed_command_notifies_without_refresh() {
        let device = MockDevice::new();
        device.fail("/feed");
        let panel = test_panel(device, true);

        let outcome = run_local(panel.dispatch(Action::Feed)).await;

        assert!(matches!(outcome, DispatchOutcome::Failed(PanelError::Network(_))));
        let notices = panel.operator().notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].starts_with("Error: "));
        assert_eq!(panel.client().transport().requests().len(), 1);
        assert!(panel.view().events().is_empty());
    }

    #[tokio::test]
    async fn test_test_sms_sends_fixed_message() {
        let panel = test_panel(MockDevice::new(), true);
        run_local(panel.dispatch(Action::SendTestSms)).await;

        let posted = panel.client().transport().bodies_to("/sendSMS");
        assert_eq!(posted[0].get("message"), Some("Test message from pet feeder"));
    }
}
