use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing field '{field}' at line {line}")]
    MissingFieldError { line: u64, field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    InputData,
    Storage,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            EtlError::CsvError(_) | EtlError::MissingFieldError { .. } => ErrorCategory::InputData,
            EtlError::IoError(_) => ErrorCategory::Storage,
            EtlError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::InputData => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
            ErrorCategory::Processing => ErrorSeverity::Medium,
        }
    }

    /// 給使用者的修正建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::CsvError(_) => {
                "Check that the input is a well-formed comma-separated file with a header row"
            }
            EtlError::IoError(_) => "Check that the file exists and that you have permission to read/write it",
            EtlError::ConfigValidationError { .. } => "Check the TOML configuration file syntax",
            EtlError::InvalidConfigValueError { .. } => "Fix the reported option and run again",
            EtlError::MissingFieldError { .. } => {
                "Every row needs JiraUserId, JiraFirstLastName and JiraUserEmail columns (email may be empty)"
            }
            EtlError::ProcessingError { .. } => "Re-run with --verbose to see which record failed",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::MissingFieldError { line, field } => {
                format!("Input row at line {} has no value for column '{}'", line, field)
            }
            EtlError::IoError(e) => format!("File access failed: {}", e),
            EtlError::CsvError(e) => format!("Could not read CSV data: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
