use thiserror::Error;

#[derive(Error, Debug)]
pub enum DateError {
    #[error("A date range cannot be constructed with null start and finish dates. Please provide at least one side of the date range.")]
    InvalidRange,

    #[error("A date period cannot be constructed when one of the start of finish dates are null. Please provide both start and finish dates.")]
    CannotCreatePeriod,

    #[error("A date period cannot be constructed without an interval to step by.")]
    MissingInterval,

    #[error("Unknown date standard: {standard}")]
    UnknownStandard { standard: String },

    #[error("Invalid interval '{value}': {reason}")]
    InvalidInterval { value: String, reason: String },

    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("Date arithmetic out of range")]
    OutOfRange,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 範圍本身的約束（缺少邊界、缺少間隔）
    Range,
    /// 輸入字串無法解析
    Input,
    Configuration,
    System,
}

impl DateError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DateError::InvalidRange
            | DateError::CannotCreatePeriod
            | DateError::MissingInterval
            | DateError::OutOfRange => ErrorCategory::Range,
            DateError::UnknownStandard { .. }
            | DateError::InvalidInterval { .. }
            | DateError::InvalidDate { .. } => ErrorCategory::Input,
            DateError::ConfigError { .. } | DateError::ConfigValidationError { .. } => {
                ErrorCategory::Configuration
            }
            DateError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DateError::InvalidRange => "Date range needs a start or a finish date".to_string(),
            DateError::CannotCreatePeriod => {
                "Cannot list dates for an open-ended range".to_string()
            }
            DateError::MissingInterval => "No interval given to step through the range".to_string(),
            DateError::UnknownStandard { standard } => {
                format!("'{}' is not a known date standard", standard)
            }
            DateError::InvalidInterval { value, .. } => {
                format!("'{}' is not a usable interval", value)
            }
            DateError::InvalidDate { value, .. } => format!("'{}' is not a valid date", value),
            DateError::OutOfRange => "Date calculation went past the supported range".to_string(),
            DateError::IoError(e) => format!("File access failed: {}", e),
            DateError::ConfigError { message } => format!("Configuration problem: {}", message),
            DateError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DateError::InvalidRange => "Provide --start, --finish, or both",
            DateError::CannotCreatePeriod => "Provide both a start and a finish date",
            DateError::MissingInterval => "Provide an ISO-8601 duration such as P1D or PT1H",
            DateError::UnknownStandard { .. } => {
                "Use iso-8601-simplistic or iso-8601-simplistic-timezone"
            }
            DateError::InvalidInterval { .. } => {
                "Use a non-zero ISO-8601 duration such as P1D, P1M or PT30M"
            }
            DateError::InvalidDate { .. } => {
                "Use YYYY-MM-DD, YYYY-MM-DD HH:MM:SS or YYYY-MM-DDTHH:MM:SS+HH:MM"
            }
            DateError::OutOfRange => "Use dates closer to the present",
            DateError::IoError(_) => "Check that the file exists and is readable",
            DateError::ConfigError { .. } | DateError::ConfigValidationError { .. } => {
                "Check the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DateError>;
