use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    #[error("Missing resource: {path}")]
    MissingResource { path: String },

    #[error("Invalid resource {path}: {reason}")]
    InvalidResource { path: String, reason: String },

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Resource,
    System,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl DemoError {
    pub fn malformed(message: impl Into<String>) -> Self {
        DemoError::MalformedInput {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::MalformedInput { .. } => ErrorCategory::Input,
            DemoError::MissingResource { .. } | DemoError::InvalidResource { .. } => {
                ErrorCategory::Resource
            }
            DemoError::FileRead { .. } | DemoError::IoError(_) => ErrorCategory::System,
            DemoError::ConfigValidationError { .. } | DemoError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Resource | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error. Input and configuration problems exit
    /// with 1, packaging and I/O problems with 3.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::MalformedInput { message } => format!("Invalid input: {}", message),
            DemoError::MissingResource { path } => {
                format!("Missing resource: {} could not be found", path)
            }
            DemoError::InvalidResource { path, .. } => {
                format!("Resource {} is not a valid text file", path)
            }
            DemoError::FileRead { path, .. } => format!("Could not read {}", path),
            DemoError::IoError(e) => format!("I/O failure: {}", e),
            DemoError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for {} is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::MalformedInput { .. } => {
                "Provide two whitespace-separated integers on standard input, e.g. `48 18`"
            }
            DemoError::MissingResource { .. } => {
                "Ship FruitList.txt next to the executable or pass --resource <PATH>"
            }
            DemoError::InvalidResource { .. } => "Make sure the resource is UTF-8 text",
            DemoError::FileRead { .. } => "Check the file permissions",
            DemoError::IoError(_) => "Check that standard input and output are available",
            DemoError::ConfigValidationError { .. } => "Check the TOML syntax of the config file",
            DemoError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the config file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
