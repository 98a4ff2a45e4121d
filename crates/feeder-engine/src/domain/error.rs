//! Panel Errors
//!
//! One error channel for every device call plus local input validation.

/// Common result type for panel operations
pub type PanelResult<T> = Result<T, PanelError>;

/// Panel-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum PanelError {
    /// The request never produced a response (connection refused, CORS, ...)
    Network(String),
    /// A structured endpoint answered with a non-success status
    Http { status: u16, path: &'static str },
    /// A structured endpoint answered with a body we could not decode
    Decode(String),
    /// Operator input rejected before any request was made
    Validation(ValidationError),
    /// Page-supplied configuration was unusable
    Config(String),
}

impl std::fmt::Display for PanelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelError::Network(msg) => write!(f, "Network error: {}", msg),
            PanelError::Http { status, path } => write!(f, "HTTP {} from {}", status, path),
            PanelError::Decode(msg) => write!(f, "Malformed response: {}", msg),
            PanelError::Validation(err) => write!(f, "{}", err),
            PanelError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for PanelError {}

impl From<ValidationError> for PanelError {
    fn from(err: ValidationError) -> Self {
        PanelError::Validation(err)
    }
}

/// Local input validation failures.
///
/// `Display` is the message shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Duration,
    Weight,
    MissingTime,
    MalformedTime,
    MissingPhone,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ValidationError::Duration => "Please enter a valid duration (1-3600 seconds)",
            ValidationError::Weight => "Please enter a valid weight (grams)",
            ValidationError::MissingTime => "Please select a time",
            ValidationError::MalformedTime => "Please enter a time as HH:MM",
            ValidationError::MissingPhone => "Please enter a phone number",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ValidationError {}
