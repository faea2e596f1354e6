use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Invalid command format! \n{usage}")]
    InvalidCommandFormat { usage: String },

    #[error("{message}")]
    InvalidField { field: String, message: String },

    #[error("Multiple values specified for the following single-valued field(s): {prefixes}")]
    DuplicateFields { prefixes: String },

    #[error("{message}")]
    MissingDependency { message: String },

    #[error("Input is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required setting: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// 錯誤分類，用於決定退出碼與提示訊息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

impl BookError {
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        BookError::InvalidField {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            BookError::InvalidCommandFormat { .. }
            | BookError::InvalidField { .. }
            | BookError::DuplicateFields { .. }
            | BookError::MissingDependency { .. }
            | BookError::InvalidEncoding(_) => ErrorCategory::Input,
            BookError::ConfigError { .. }
            | BookError::ConfigValidationError { .. }
            | BookError::InvalidConfigValueError { .. }
            | BookError::MissingConfigError { .. } => ErrorCategory::Configuration,
            BookError::IoError(_)
            | BookError::CsvError(_)
            | BookError::ZipError(_)
            | BookError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// 解析錯誤的訊息本身就是給使用者看的，直接回傳
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => self.to_string(),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BookError::InvalidCommandFormat { .. } => {
                "Provide n/, p/, e/ and a/ and remove any text before the first prefix"
            }
            BookError::InvalidField { .. } => "Correct the highlighted field and try again",
            BookError::DuplicateFields { .. } => {
                "Give each of n/, p/, e/ and a/ at most once"
            }
            BookError::MissingDependency { .. } => "Add av/AVAILABILITY to the command",
            BookError::InvalidEncoding(_) => "Save the input file as UTF-8 and try again",
            BookError::ConfigError { .. }
            | BookError::ConfigValidationError { .. }
            | BookError::InvalidConfigValueError { .. }
            | BookError::MissingConfigError { .. } => {
                "Check the command-line flags and the TOML configuration file"
            }
            BookError::IoError(_) => "Check that the file exists and is readable/writable",
            BookError::CsvError(_) | BookError::ZipError(_) | BookError::SerializationError(_) => {
                "Check the output path and available disk space"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, BookError>;
