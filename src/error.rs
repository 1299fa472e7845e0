//! Error types for the project tracker core.

use std::path::PathBuf;
use thiserror::Error;

/// A rule broken by a create or import request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Project name \"{name}\" is too short (at least {min} characters required)")]
    NameTooShort { name: String, min: usize },

    #[error("A project with the name \"{name}\" already exists")]
    DuplicateName { name: String },

    #[error("Invalid date format for project \"{name}\"")]
    InvalidDate { name: String },
}

/// Errors surfaced by manager and file operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid JSON format: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TrackerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TrackerError::Io {
            path: path.into(),
            source,
        }
    }

    /// The validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            TrackerError::Validation(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, TrackerError::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_project() {
        let err = ValidationError::DuplicateName {
            name: "House".into(),
        };
        assert_eq!(
            err.to_string(),
            "A project with the name \"House\" already exists"
        );

        let err = ValidationError::InvalidDate { name: "Bad".into() };
        assert!(err.to_string().contains("\"Bad\""));
    }

    #[test]
    fn tracker_error_exposes_validation() {
        let err: TrackerError = ValidationError::NameTooShort {
            name: "abc".into(),
            min: 5,
        }
        .into();
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::NameTooShort { min: 5, .. })
        ));
        assert!(!err.is_parse());
    }

    #[test]
    fn parse_error_is_distinct() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err = TrackerError::from(json_err);
        assert!(err.is_parse());
        assert!(err.as_validation().is_none());
    }
}
