//! Crate-level error types.

use std::fmt;

use crate::step::TraceError;
use crate::validation::ValidationError;

/// Errors produced by the sortscope crate.
#[derive(Debug)]
pub enum SortscopeError {
    /// Raw array text was rejected.
    Validation(ValidationError),
    /// No registered algorithm matches the requested name.
    UnknownAlgorithm(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A trace broke the step contract.
    Trace(TraceError),
}

impl fmt::Display for SortscopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => {
                write!(f, "invalid input: {e}. {}", e.hint())
            }
            Self::UnknownAlgorithm(name) => {
                write!(f, "unknown algorithm: {name:?}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Trace(e) => write!(f, "invalid trace: {e}"),
        }
    }
}

impl std::error::Error for SortscopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Trace(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for SortscopeError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<TraceError> for SortscopeError {
    fn from(e: TraceError) -> Self {
        Self::Trace(e)
    }
}

impl From<std::io::Error> for SortscopeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn validation_message_carries_the_hint() {
        let err = SortscopeError::from(ValidationError::Empty);
        assert_eq!(
            err.to_string(),
            "invalid input: empty input. Please enter at least one number."
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn unknown_algorithm_names_the_request() {
        let err = SortscopeError::UnknownAlgorithm("bogo".into());
        assert_eq!(err.to_string(), "unknown algorithm: \"bogo\"");
        assert!(err.source().is_none());
    }
}
