use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelloError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad input from the user; fixable by changing flags or config.
    High,
    /// The environment is broken: unreadable files, failed output encoding.
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for the binary.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl HelloError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HelloError::ConfigValidationError { .. }
            | HelloError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            HelloError::IoError(_) | HelloError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HelloError::IoError(e) => format!("Could not read a required file: {}", e),
            HelloError::SerializationError(e) => format!("Could not encode output: {}", e),
            HelloError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            HelloError::InvalidConfigValueError { field, value, reason } => {
                format!("Setting '{}' has invalid value '{}': {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HelloError::IoError(_) => "Check that the config path exists and is readable",
            HelloError::SerializationError(_) => "Retry with --format text",
            HelloError::ConfigValidationError { .. } => {
                "Check the config file for TOML syntax errors and unsupported values"
            }
            HelloError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted values"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HelloError>;
