//! HTTP DTOs for the API surface.
//!
//! The questionnaire request body binds the domain submission type directly,
//! and entity responses serialize the domain entities, whose serde shape is
//! the wire format. What remains here are the query-parameter carriers and
//! the fixed response envelopes.

use serde::{Deserialize, Serialize};

/// Query parameters for `POST /api/profile`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfileParams {
    pub questionnaire_id: String,
}

/// Query parameters for `POST /api/plan`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratePlanParams {
    pub profile_id: String,
}

/// Response for the root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    /// A 404 body naming the missing entity.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    /// A 400 body for rejected input.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    /// A 500 body with a generic message; detail stays in the logs.
    pub fn internal() -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: "An internal error occurred".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_constructors_set_codes() {
        assert_eq!(ErrorResponse::not_found("Plan not found").code, "NOT_FOUND");
        assert_eq!(ErrorResponse::bad_request("bad").code, "BAD_REQUEST");
        assert_eq!(ErrorResponse::internal().code, "INTERNAL_ERROR");
    }

    #[test]
    fn internal_error_is_generic() {
        let body = ErrorResponse::internal();
        assert_eq!(body.message, "An internal error occurred");
    }

    #[test]
    fn profile_params_deserialize_from_query_shape() {
        let params: CreateProfileParams =
            serde_json::from_str(r#"{"questionnaire_id": "abc"}"#).unwrap();
        assert_eq!(params.questionnaire_id, "abc");
    }
}
