//! Error types for the domain layer.

use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    QuestionnaireNotFound,
    ProfileNotFound,
    PlanNotFound,

    // Infrastructure errors
    StoreFailure,
    GenerationFailure,
    InternalError,
}

impl ErrorCode {
    /// Whether this code denotes a missing entity.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorCode::QuestionnaireNotFound
                | ErrorCode::ProfileNotFound
                | ErrorCode::PlanNotFound
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::QuestionnaireNotFound => "QUESTIONNAIRE_NOT_FOUND",
            ErrorCode::ProfileNotFound => "PROFILE_NOT_FOUND",
            ErrorCode::PlanNotFound => "PLAN_NOT_FOUND",
            ErrorCode::StoreFailure => "STORE_FAILURE",
            ErrorCode::GenerationFailure => "GENERATION_FAILURE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code and message.
///
/// The message is internal detail: the HTTP adapter logs it and returns a
/// generic body to the caller.
#[derive(Debug, Clone)]
pub struct DomainError {
    code: ErrorCode,
    message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: format!("{}: {}", field.into(), message.into()),
        }
    }

    /// Creates a store failure error.
    pub fn store(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreFailure, message)
    }

    /// Creates a generation-service failure error.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::GenerationFailure, message)
    }

    /// Returns the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::ProfileNotFound, "Profile not found");
        assert_eq!(format!("{}", err), "[PROFILE_NOT_FOUND] Profile not found");
    }

    #[test]
    fn validation_error_includes_field() {
        let err = DomainError::validation("commitment_level", "must be between 1 and 10");
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(err.message().contains("commitment_level"));
    }

    #[test]
    fn not_found_classification() {
        assert!(ErrorCode::QuestionnaireNotFound.is_not_found());
        assert!(ErrorCode::ProfileNotFound.is_not_found());
        assert!(ErrorCode::PlanNotFound.is_not_found());
        assert!(!ErrorCode::StoreFailure.is_not_found());
        assert!(!ErrorCode::GenerationFailure.is_not_found());
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::PlanNotFound), "PLAN_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::GenerationFailure), "GENERATION_FAILURE");
    }
}
