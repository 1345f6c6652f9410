use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Inventory XML error: {0}")]
    XmlError(#[from] quick_xml::DeError),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Inventory export not found: {path}")]
    InventoryNotFound { path: String },

    #[error("Profile '{name}' error: {message}")]
    ProfileError { name: String, message: String },

    #[error("Color ID {id} already exists")]
    DuplicateColor { id: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Config,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AuditError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AuditError::IoError(_) | AuditError::InventoryNotFound { .. } => ErrorCategory::Io,
            AuditError::CsvError(_)
            | AuditError::SerializationError(_)
            | AuditError::XmlError(_)
            | AuditError::PatternError(_) => ErrorCategory::Parse,
            AuditError::ConfigError { .. }
            | AuditError::InvalidConfigValueError { .. }
            | AuditError::ProfileError { .. } => ErrorCategory::Config,
            AuditError::DuplicateColor { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AuditError::DuplicateColor { .. } => ErrorSeverity::Low,
            AuditError::InventoryNotFound { .. } => ErrorSeverity::Medium,
            AuditError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AuditError::InventoryNotFound { path } => format!(
                "Export the store inventory and save it exactly as '{}'",
                path
            ),
            AuditError::XmlError(_) => {
                "Re-download the inventory export; the XML file looks truncated or edited"
                    .to_string()
            }
            AuditError::CsvError(_) => "Check the file is tab or comma separated with a header row".to_string(),
            AuditError::ConfigError { .. } | AuditError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or remove it to fall back to defaults".to_string()
            }
            AuditError::ProfileError { name, .. } => {
                format!("Check lego_profiles/{}.json is a JSON list of categories", name)
            }
            AuditError::DuplicateColor { .. } => "Nothing to do, the color is already listed".to_string(),
            AuditError::SerializationError(_) => "Check the JSON file syntax".to_string(),
            AuditError::PatternError(_) => "Shorten the category prefix".to_string(),
            AuditError::IoError(_) => "Check file permissions and free disk space".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AuditError::InventoryNotFound { path } => format!("{} not found!", path),
            AuditError::DuplicateColor { id } => format!("Error: Color ID {} already exists!", id),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_and_category() {
        let missing = AuditError::InventoryNotFound {
            path: "store.xml".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Io);
        assert_eq!(missing.severity(), ErrorSeverity::Medium);
        assert_eq!(missing.user_friendly_message(), "store.xml not found!");

        let dup = AuditError::DuplicateColor { id: 151 };
        assert_eq!(dup.severity(), ErrorSeverity::Low);
        assert!(dup.recovery_suggestion().contains("already"));
    }
}
