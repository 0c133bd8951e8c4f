use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Model request failed: {0}")]
    ModelError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required config: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid config value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Data,
    Model,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GenError::MissingConfigError { .. } | GenError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            GenError::CsvError(_) | GenError::ProcessingError { .. } => ErrorCategory::Data,
            GenError::ModelError(_) => ErrorCategory::Model,
            GenError::IoError(_) | GenError::SerializationError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GenError::MissingConfigError { .. } | GenError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            GenError::CsvError(_) | GenError::ProcessingError { .. } => ErrorSeverity::High,
            GenError::ModelError(_) => ErrorSeverity::Critical,
            GenError::IoError(_) | GenError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GenError::MissingConfigError { field } => {
                format!("{} must be specified", field)
            }
            GenError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                format!("{} '{}' is invalid: {}", field, value, reason)
            }
            GenError::ProcessingError { message } => {
                format!("Failed to process the source table: {}", message)
            }
            GenError::CsvError(e) => format!("Failed to parse CSV data: {}", e),
            GenError::ModelError(e) => format!("The perturbation model request failed: {}", e),
            GenError::IoError(e) => format!("File operation failed: {}", e),
            GenError::SerializationError(e) => format!("Serialization failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GenError::MissingConfigError { field } => {
                format!("Pass --{} on the command line", field.replace('_', "-"))
            }
            GenError::InvalidConfigValueError { field, .. } => {
                format!("Check the value passed for --{}", field.replace('_', "-"))
            }
            GenError::ProcessingError { .. } | GenError::CsvError(_) => {
                "Verify the source file is a CSV with a header row containing the source column"
                    .to_string()
            }
            GenError::ModelError(_) => {
                "Make sure the model server is running and reachable at --model-endpoint"
                    .to_string()
            }
            GenError::IoError(_) => {
                "Check file paths and permissions for the source and destination".to_string()
            }
            GenError::SerializationError(_) => {
                "This is likely a bug in the request payload; rerun with --verbose".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
