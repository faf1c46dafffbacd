use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisplayLayoutError {
    #[error("{0}")]
    Error(String),

    #[error("Unsupported")]
    Unsupported,

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Monitor enumeration failed")]
    EnumerationFailed,

    #[error("Invalid window handle")]
    InvalidWindow,

    #[error("Monitor info unavailable")]
    MonitorInfoUnavailable,

    #[error("Display mode unavailable for {device_name}")]
    DisplayModeUnavailable { device_name: String },

    #[error("Failed to move window")]
    MoveFailed,

    #[error("Platform error: {0}")]
    Platform(String),
}

impl DisplayLayoutError {
    pub fn new<S: ToString>(err: S) -> Self {
        DisplayLayoutError::Error(err.to_string())
    }

    pub fn platform<S: ToString>(err: S) -> Self {
        DisplayLayoutError::Platform(err.to_string())
    }
}

pub type DisplayLayoutResult<T> = Result<T, DisplayLayoutError>;
