//! Alert Phone Number
//!
//! The number SMS alerts go to. The device reports it inside the aggregate
//! status text; the panel reads it back once at startup to fill the form.

const PHONE_LABEL: &str = "Phone:";
const UNSET_SENTINEL: &str = "null";

/// Operator-entered phone number; only emptiness is checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: &str) -> Result<Self, super::ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(super::ValidationError::MissingPhone);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pull the configured number out of the `/status` text.
///
/// Takes the first line mentioning `Phone:` and the field after its first
/// colon. `None` when there is no such line, or the value is empty or the
/// device's `null` placeholder.
pub fn extract_phone(status: &str) -> Option<PhoneNumber> {
    let line = status.lines().find(|line| line.contains(PHONE_LABEL))?;
    let value = line.split(':').nth(1)?.trim();
    if value.is_empty() || value == UNSET_SENTINEL {
        return None;
    }
    Some(PhoneNumber(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_configured_number() {
        let status = "Time: 08:15\nScale: 412.7g\nPhone: +15551234567\nGSM: registered";
        assert_eq!(extract_phone(status).unwrap().as_str(), "+15551234567");
    }

    #[test]
    fn test_extract_ignores_unset_values() {
        assert_eq!(extract_phone("Phone: null"), None);
        assert_eq!(extract_phone("Phone:"), None);
        assert_eq!(extract_phone("Phone:    \nOther: x"), None);
        assert_eq!(extract_phone("Scale: 0g"), None);
    }

    #[test]
    fn test_extract_uses_first_matching_line() {
        let status = "Phone: +111\nPhone: +222";
        assert_eq!(extract_phone(status).unwrap().as_str(), "+111");
    }

    #[test]
    fn test_phone_requires_text() {
        assert!(PhoneNumber::parse("  ").is_err());
        assert_eq!(PhoneNumber::parse(" +4420 ").unwrap().as_str(), "+4420");
    }
}
