use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreboardError {
    #[error("Domain list not found: {path}")]
    MissingInputError { path: String },

    #[error("Malformed checklist for domain '{domain}': {source}")]
    ChecklistFormatError {
        domain: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScoreboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingInputError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::ChecklistFormatError { .. } | Self::SerializationError(_) => ErrorCategory::Data,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::MissingInputError { path } => {
                format!("Create '{}' with one domain identifier per line", path)
            }
            Self::ChecklistFormatError { domain, .. } => format!(
                "Fix '{}/docs/CHECKLIST.json': the top level must map section names to maps of item name -> boolean",
                domain
            ),
            Self::IoError(_) => {
                "Check file permissions and free disk space, then rerun".to_string()
            }
            Self::SerializationError(_) => {
                "Verify the checklist files contain valid JSON".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Correct the value passed to --{}", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingInputError { path } => format!("Cannot find the domain list at {}", path),
            Self::ChecklistFormatError { domain, .. } => {
                format!("The checklist for '{}' could not be parsed", domain)
            }
            Self::IoError(e) => format!("A file operation failed: {}", e),
            Self::SerializationError(e) => format!("JSON processing failed: {}", e),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreboardError>;
