use std::fmt;

/// Caller-input and collaborator errors for report data dispatch.
///
/// The message carried by each caller-input variant is surfaced verbatim to
/// the caller; downstream consumers assert on the exact text, so the strings
/// are part of the crate's contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    MissingParameter(String),
    NotFound(String),
    SchemaMismatch(String),
    TypeMismatch(String),
    InvalidQueue(String),
    Forbidden(String),
    Database(String),
    Queue(String),
    Configuration(String),
}

impl DispatchError {
    /// Build the canonical "required parameter" message for a missing field.
    pub fn required_parameter(name: &str) -> Self {
        DispatchError::MissingParameter(format!("{name} is a required parameter."))
    }

    /// Whether this error was caused by caller input (vs. a collaborator
    /// failure). Caller-input errors surface as status 400.
    pub fn is_caller_error(&self) -> bool {
        !matches!(
            self,
            DispatchError::Database(_)
                | DispatchError::Queue(_)
                | DispatchError::Configuration(_)
        )
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::MissingParameter(msg)
            | DispatchError::NotFound(msg)
            | DispatchError::SchemaMismatch(msg)
            | DispatchError::TypeMismatch(msg)
            | DispatchError::InvalidQueue(msg)
            | DispatchError::Forbidden(msg) => write!(f, "{msg}"),
            DispatchError::Database(msg) => write!(f, "Database error: {msg}"),
            DispatchError::Queue(msg) => write!(f, "Queue error: {msg}"),
            DispatchError::Configuration(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for DispatchError {}

pub type Result<T> = std::result::Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_parameter_message() {
        let err = DispatchError::required_parameter("schema");
        assert_eq!(err.to_string(), "schema is a required parameter.");
    }

    #[test]
    fn test_caller_error_classification() {
        assert!(DispatchError::required_parameter("schema").is_caller_error());
        assert!(DispatchError::Forbidden("nope".into()).is_caller_error());
        assert!(!DispatchError::Database("down".into()).is_caller_error());
        assert!(!DispatchError::Queue("down".into()).is_caller_error());
    }

    #[test]
    fn test_caller_errors_display_verbatim() {
        let err = DispatchError::NotFound("provider_uuid abc does not exist".into());
        assert_eq!(err.to_string(), "provider_uuid abc does not exist");
    }
}
