use thiserror::Error;

#[derive(Error, Debug)]
pub enum AkapunError {
    #[error("unknown click type was given: {0}")]
    UnknownClickType(String),

    #[error("failed to encode stamp request: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("request to attendance backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("deadline exceeded before the stamp was recorded")]
    DeadlineExceeded,

    #[error("status code was not 200: {0}")]
    UnexpectedStatus(u16),

    /// HTTP 200 但 `success` 為 false
    #[error("stamp was rejected by Akashi")]
    Rejected,

    #[error("failed to parse stamp response: {0}")]
    ResponseParse(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid event: {message}")]
    InvalidEvent { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Serialization,
    Transport,
    BackendStatus,
    BackendRejection,
    ResponseParse,
    Config,
    Io,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Input => "input",
            ErrorKind::Serialization => "serialization",
            ErrorKind::Transport => "transport",
            ErrorKind::BackendStatus => "backend_status",
            ErrorKind::BackendRejection => "backend_rejection",
            ErrorKind::ResponseParse => "response_parse",
            ErrorKind::Config => "config",
            ErrorKind::Io => "io",
        }
    }
}

impl AkapunError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AkapunError::UnknownClickType(_) | AkapunError::InvalidEvent { .. } => ErrorKind::Input,
            AkapunError::Serialization(_) => ErrorKind::Serialization,
            AkapunError::Transport(_) | AkapunError::DeadlineExceeded => ErrorKind::Transport,
            AkapunError::UnexpectedStatus(_) => ErrorKind::BackendStatus,
            AkapunError::Rejected => ErrorKind::BackendRejection,
            AkapunError::ResponseParse(_) => ErrorKind::ResponseParse,
            AkapunError::MissingConfigError { .. }
            | AkapunError::InvalidConfigValueError { .. } => ErrorKind::Config,
            AkapunError::IoError(_) => ErrorKind::Io,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Input => "Use one of SINGLE, DOUBLE or LONG as the click type",
            ErrorKind::Serialization => "This is a bug, please report it",
            ErrorKind::Transport => "Check the network and retry the punch manually",
            ErrorKind::BackendStatus => "Check AKASHI_CORP_ID and AKASHI_TOKEN",
            ErrorKind::BackendRejection => "Check the stamp on Akashi and punch manually if missing",
            ErrorKind::ResponseParse => "Check AKASHI_BASE_URL points at the Akashi cooperation API",
            ErrorKind::Config => "Check the environment variables",
            ErrorKind::Io => "Check the file path and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, AkapunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_carries_code() {
        let err = AkapunError::UnexpectedStatus(403);
        assert_eq!(err.to_string(), "status code was not 200: 403");
        assert_eq!(err.kind(), ErrorKind::BackendStatus);
    }

    #[test]
    fn test_rejection_is_its_own_kind() {
        assert_eq!(AkapunError::Rejected.kind(), ErrorKind::BackendRejection);
        assert_ne!(AkapunError::Rejected.kind(), ErrorKind::Transport);
        assert_eq!(AkapunError::DeadlineExceeded.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_config_failures_share_one_kind() {
        let missing = AkapunError::MissingConfigError {
            field: "AKASHI_TOKEN".to_string(),
        };
        let invalid = AkapunError::InvalidConfigValueError {
            field: "request_timeout_secs".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 300".to_string(),
        };

        assert_eq!(missing.kind(), ErrorKind::Config);
        assert_eq!(invalid.kind(), ErrorKind::Config);
        assert_eq!(missing.to_string(), "Missing configuration: AKASHI_TOKEN");
    }
}
