//! In-memory stand-ins for the device, the operator, the page and the event
//! loop, shared by the unit tests.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::LocalSet;

use crate::config::PanelConfig;
use crate::device::{DeviceRequest, DeviceResponse, DeviceTransport, FormBody};
use crate::domain::{PanelError, PanelResult, PhoneNumber, ScheduleKind};
use crate::panel::{LocalTask, Operator, Panel, PanelView, ScheduleFragment, StatusFragment, SubsystemFragment, TaskRuntime};

pub type TestPanel = Panel<MockDevice, RecordingOperator, RecordingView, TokioRuntime>;

pub fn test_panel(device: MockDevice, confirm: bool) -> Arc<TestPanel> {
    Arc::new(Panel::new(
        PanelConfig::default(),
        device,
        RecordingOperator::new(confirm),
        RecordingView::default(),
        TokioRuntime,
    ))
}

/// Drive `future` and then every task it spawned to completion
pub async fn run_local<F: Future>(future: F) -> F::Output {
    let local = LocalSet::new();
    let output = local.run_until(future).await;
    local.await;
    output
}

#[derive(Debug, Clone)]
enum Reply {
    Respond(DeviceResponse),
    Fail,
    Hang,
}

/// Device double. Unscripted paths answer `200 OK`.
#[derive(Default)]
pub struct MockDevice {
    requests: Mutex<Vec<DeviceRequest>>,
    replies: Mutex<HashMap<String, Reply>>,
}

impl MockDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &str, status: u16, body: &str) {
        let reply = Reply::Respond(DeviceResponse { status, body: body.to_string() });
        self.replies.lock().unwrap().insert(path.to_string(), reply);
    }

    pub fn fail(&self, path: &str) {
        self.replies.lock().unwrap().insert(path.to_string(), Reply::Fail);
    }

    /// Requests to `path` never complete
    pub fn hang(&self, path: &str) {
        self.replies.lock().unwrap().insert(path.to_string(), Reply::Hang);
    }

    pub fn requests(&self) -> Vec<DeviceRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> usize {
        self.requests.lock().unwrap().iter().filter(|r| r.path() == path).count()
    }

    pub fn bodies_to(&self, path: &str) -> Vec<FormBody> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.path() == path)
            .filter_map(|r| r.body.clone())
            .collect()
    }
}

#[async_trait(?Send)]
impl DeviceTransport for MockDevice {
    async fn send(&self, request: DeviceRequest) -> PanelResult<DeviceResponse> {
        let path = request.path();
        self.requests.lock().unwrap().push(request);
        let reply = self.replies.lock().unwrap().get(path).cloned();
        match reply {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Fail) => Err(PanelError::Network(format!("connection refused: {}", path))),
            Some(Reply::Hang) => std::future::pending().await,
            None => Ok(DeviceResponse::ok("OK")),
        }
    }
}

pub struct RecordingOperator {
    answer: bool,
    prompts: Mutex<Vec<String>>,
    notices: Mutex<Vec<String>>,
}

impl RecordingOperator {
    pub fn new(answer: bool) -> Self {
        Self { answer, prompts: Mutex::default(), notices: Mutex::default() }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

impl Operator for RecordingOperator {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }

    fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Status(StatusFragment),
    WashTimer(SubsystemFragment),
    WeightDrop(SubsystemFragment),
    Schedule(ScheduleKind, ScheduleFragment),
    Phone(PhoneNumber),
}

#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<Rendered>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<Rendered> {
        self.events.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Rendered> {
        self.events.lock().unwrap().last().cloned()
    }

    fn push(&self, event: Rendered) {
        self.events.lock().unwrap().push(event);
    }
}

impl PanelView for RecordingView {
    fn show_status(&self, fragment: StatusFragment) {
        self.push(Rendered::Status(fragment));
    }

    fn show_wash_timer(&self, fragment: SubsystemFragment) {
        self.push(Rendered::WashTimer(fragment));
    }

    fn show_weight_drop(&self, fragment: SubsystemFragment) {
        self.push(Rendered::WeightDrop(fragment));
    }

    fn show_schedule(&self, kind: ScheduleKind, fragment: ScheduleFragment) {
        self.push(Rendered::Schedule(kind, fragment));
    }

    fn seed_phone(&self, number: PhoneNumber) {
        self.push(Rendered::Phone(number));
    }
}

/// Tasks go on the surrounding `LocalSet`; sleeps follow tokio's (pausable) clock
pub struct TokioRuntime;

impl TaskRuntime for TokioRuntime {
    fn spawn(&self, task: LocalTask) {
        tokio::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalTask {
        Box::pin(tokio::time::sleep(duration))
    }
}
