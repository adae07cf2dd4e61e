use thiserror::Error;

/// Failures reported by a [`Host`](super::host::Host) implementation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("no window object available")]
    NoWindow,
    #[error("no 2d drawing context available")]
    NoContext,
    #[error("no high-resolution clock available")]
    NoClock,
    #[error("frame request rejected: {0}")]
    FrameRequest(String),
    #[error("timer request rejected: {0}")]
    TimerRequest(String),
    #[error("resize listener rejected: {0}")]
    Listener(String),
}

/// Errors surfaced while configuring or mounting a particle field.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("host error: {0}")]
    Host(#[from] HostError),
}
