use thiserror::Error;

#[derive(Error, Debug)]
pub enum LrError {
    #[error("Could not read input file {path}: {source}")]
    MissingInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed line {line_number}: {text:?}")]
    MalformedLine { line_number: usize, text: String },

    #[error("Failed to write output to {path}: {source}")]
    WriteFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Line pattern error: {0}")]
    PatternError(#[from] regex::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Parse,
    Output,
    Configuration,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 使用者可修正的錯誤 (輸入、設定)
    High,
    /// 系統層級錯誤 (磁碟、序列化)
    Critical,
}

impl LrError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LrError::MissingInput { .. } => ErrorCategory::Input,
            LrError::MalformedLine { .. } => ErrorCategory::Parse,
            LrError::WriteFailure { .. } => ErrorCategory::Output,
            LrError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            LrError::CsvError(_) | LrError::SerializationError(_) | LrError::PatternError(_) => {
                ErrorCategory::Internal
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Parse | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::Output | ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LrError::MissingInput { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => format!("Input file not found: {}", path),
                std::io::ErrorKind::InvalidData => {
                    format!("Input file {} is not valid UTF-8 text: {}", path, source)
                }
                _ => format!("Could not read input file {}: {}", path, source),
            },
            LrError::MalformedLine { line_number, text } => {
                format!("Malformed line {}: {:?}", line_number, text)
            }
            LrError::WriteFailure { path, source } => {
                format!("Could not write output file {}: {}", path, source)
            }
            LrError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LrError::MissingInput { source, .. }
                if source.kind() == std::io::ErrorKind::InvalidData =>
            {
                "Save the input file as UTF-8 text"
            }
            LrError::MissingInput { .. } => "Check that the input path exists and is readable",
            LrError::MalformedLine { .. } => {
                "Fix the line so it reads like 'L10' or 'R5', or rerun without --strict to skip it"
            }
            LrError::WriteFailure { .. } => {
                "Check that the output directory exists and is writable"
            }
            LrError::InvalidConfigValue { .. } => "Review the command line arguments",
            _ => "This is likely a bug, please report it with the input that triggered it",
        }
    }
}

pub type Result<T> = std::result::Result<T, LrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_severity() {
        let missing = LrError::MissingInput {
            path: "input.txt".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(missing.category(), ErrorCategory::Input);
        assert_eq!(missing.exit_code(), 1);

        let malformed = LrError::MalformedLine {
            line_number: 2,
            text: "X9".to_string(),
        };
        assert_eq!(malformed.severity(), ErrorSeverity::High);
        assert_eq!(malformed.exit_code(), 1);

        let write = LrError::WriteFailure {
            path: "out.txt".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(write.severity(), ErrorSeverity::Critical);
        assert_eq!(write.exit_code(), 3);
    }

    #[test]
    fn test_unreadable_input_is_not_reported_as_missing() {
        let missing = LrError::MissingInput {
            path: "input.txt".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(missing.user_friendly_message().contains("not found"));

        let undecodable = LrError::MissingInput {
            path: "input.txt".to_string(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            ),
        };
        let message = undecodable.user_friendly_message();
        assert!(!message.contains("not found"));
        assert!(message.contains("UTF-8"));
        assert_eq!(undecodable.exit_code(), 1);
    }

    #[test]
    fn test_malformed_message_names_line_and_text() {
        let err = LrError::MalformedLine {
            line_number: 2,
            text: "X9".to_string(),
        };
        assert_eq!(err.to_string(), "Malformed line 2: \"X9\"");
        assert!(err.user_friendly_message().contains("X9"));
    }
}
