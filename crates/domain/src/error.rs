//! Common error types used across the workspace.
//!
//! Each failure family gets its own typed error; [`WatchdogError`] unifies
//! them through `#[from]` conversions so callers can use `?` freely.

/// Failure talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The request never produced a response (rejected fetch, transport error).
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}")]
    Status {
        status: u16,
        /// The `error` field of a JSON error body, when the server sent one.
        message: Option<String>,
    },
    /// The response body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// JSON error body returned by the server on non-2xx responses.
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

impl NetworkError {
    /// Error for a non-2xx response with status `status` and body `body`.
    ///
    /// The `error` field is kept when the body is a JSON object carrying one;
    /// any other body is ignored.
    #[must_use]
    pub fn from_status_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|body| body.error);
        Self::Status { status, message }
    }

    /// Text suitable for showing to the user or writing to the console.
    ///
    /// Prefers the server-provided `{error}` message verbatim.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Client-side validation failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("message text must not be empty")]
    EmptyMessage,
    #[error("chart range is empty: y_min {y_min} must be below y_max {y_max}")]
    InvalidChartRange { y_min: f64, y_max: f64 },
    #[error("rolling buffer capacity must be non-zero")]
    ZeroCapacity,
    #[error("{kind} slot {index} is out of range (max {max})")]
    SlotOutOfRange {
        kind: &'static str,
        index: usize,
        max: usize,
    },
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
    #[error("unknown trigger mode '{0}'")]
    UnknownTriggerMode(String),
}

/// Umbrella error for everything the dashboard can fail on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WatchdogError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
