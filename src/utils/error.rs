use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {endpoint}")]
    ApiStatusError { endpoint: String, status: u16 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BoardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BoardError::ApiError(_) | BoardError::ApiStatusError { .. } => ErrorCategory::Network,
            BoardError::CsvError(_) | BoardError::SerializationError(_) => ErrorCategory::Data,
            BoardError::ConfigValidationError { .. }
            | BoardError::InvalidConfigValueError { .. }
            | BoardError::MissingConfigError { .. } => ErrorCategory::Configuration,
            BoardError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BoardError::ApiError(e) if e.is_timeout() => ErrorSeverity::Medium,
            BoardError::ApiStatusError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            BoardError::ApiError(_) | BoardError::ApiStatusError { .. } => ErrorSeverity::High,
            BoardError::CsvError(_) | BoardError::SerializationError(_) => ErrorSeverity::High,
            BoardError::ConfigValidationError { .. }
            | BoardError::InvalidConfigValueError { .. }
            | BoardError::MissingConfigError { .. } => ErrorSeverity::High,
            BoardError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BoardError::ApiError(_) => {
                "Check that the order API is reachable and the endpoint is correct".to_string()
            }
            BoardError::ApiStatusError { status, .. } if *status >= 500 => {
                "The order API is failing, retry in a moment".to_string()
            }
            BoardError::ApiStatusError { status, .. } => {
                format!("The order API rejected the request ({}), check the endpoint", status)
            }
            BoardError::CsvError(_) => "Check that the output path is writable".to_string(),
            BoardError::SerializationError(_) => {
                "Make sure the order data is a JSON array of orders".to_string()
            }
            BoardError::ConfigValidationError { field, .. }
            | BoardError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting in the config file or CLI flags", field)
            }
            BoardError::MissingConfigError { field } => {
                format!("Provide '{}' in the config file or on the command line", field)
            }
            BoardError::IoError(_) => "Check file paths and permissions".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not load orders: {}", self),
            ErrorCategory::Data => format!("Order data could not be processed: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
