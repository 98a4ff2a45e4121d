//! Requests and Responses

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{Endpoint, Method};
use crate::domain::Command;

/// Bytes left unescaped in `application/x-www-form-urlencoded` bodies
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'*');

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Ordered form fields of a POST body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    fields: Vec<(&'static str, String)>,
}

impl FormBody {
    pub fn single(name: &'static str, value: impl Into<String>) -> Self {
        Self { fields: vec![(name, value.into())] }
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }

    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| format!("{}={}", name, utf8_percent_encode(value, FORM_VALUE)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceRequest {
    pub endpoint: Endpoint,
    pub body: Option<FormBody>,
}

impl DeviceRequest {
    pub fn get(endpoint: Endpoint) -> Self {
        Self { endpoint, body: None }
    }

    pub fn method(&self) -> Method {
        self.endpoint.method()
    }

    pub fn path(&self) -> &'static str {
        self.endpoint.path()
    }
}

impl From<&Command> for DeviceRequest {
    fn from(command: &Command) -> Self {
        let body = match command {
            Command::Feed | Command::Wash | Command::Tare | Command::StopWash | Command::StopMonitoring => None,
            Command::SetWashDuration(duration) => Some(FormBody::single("duration", duration.seconds().to_string())),
            Command::SetWeightDrop(weight) => Some(FormBody::single("weight", weight.grams().to_string())),
            Command::AddTime(_, time) | Command::RemoveTime(_, time) => Some(FormBody::single("time", time.as_str())),
            Command::SetPhone(number) => Some(FormBody::single("number", number.as_str())),
            Command::SendSms(message) => Some(FormBody::single("message", message.as_str())),
        };
        Self { endpoint: Endpoint::for_command(command), body }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceResponse {
    pub status: u16,
    pub body: String,
}

impl DeviceResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
