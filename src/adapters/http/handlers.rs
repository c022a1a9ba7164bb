//! HTTP handlers for the API operations.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::{
    CreateProfileCommand, CreateProfileHandler, GeneratePlanCommand, GeneratePlanHandler,
    GetPlanHandler, GetPlanQuery, SubmitQuestionnaireCommand, SubmitQuestionnaireHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, QuestionnaireId};
use crate::domain::questionnaire::QuestionnaireSubmission;

use super::dto::{CreateProfileParams, ErrorResponse, GeneratePlanParams, MessageResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ApiState {
    submit_questionnaire: Arc<SubmitQuestionnaireHandler>,
    create_profile: Arc<CreateProfileHandler>,
    generate_plan: Arc<GeneratePlanHandler>,
    get_plan: Arc<GetPlanHandler>,
}

impl ApiState {
    pub fn new(
        submit_questionnaire: Arc<SubmitQuestionnaireHandler>,
        create_profile: Arc<CreateProfileHandler>,
        generate_plan: Arc<GeneratePlanHandler>,
        get_plan: Arc<GetPlanHandler>,
    ) -> Self {
        Self {
            submit_questionnaire,
            create_profile,
            generate_plan,
            get_plan,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/ - service banner
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "LifePlan AI - Productivity Coaching API".to_string(),
    })
}

/// POST /api/questionnaire - store questionnaire answers
pub async fn submit_questionnaire(
    State(state): State<ApiState>,
    Json(submission): Json<QuestionnaireSubmission>,
) -> Response {
    match state
        .submit_questionnaire
        .handle(SubmitQuestionnaireCommand { submission })
        .await
    {
        Ok(answer) => (StatusCode::OK, Json(answer)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/profile?questionnaire_id=... - derive and store a profile
pub async fn create_profile(
    State(state): State<ApiState>,
    Query(params): Query<CreateProfileParams>,
) -> Response {
    // A malformed id cannot reference a stored document, so it resolves the
    // same way an unknown one does.
    let questionnaire_id = match params.questionnaire_id.parse::<QuestionnaireId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::not_found("Questionnaire not found")),
            )
                .into_response()
        }
    };

    match state
        .create_profile
        .handle(CreateProfileCommand { questionnaire_id })
        .await
    {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/plan?profile_id=... - generate and store a plan
pub async fn generate_plan(
    State(state): State<ApiState>,
    Query(params): Query<GeneratePlanParams>,
) -> Response {
    let profile_id = match params.profile_id.parse::<ProfileId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::not_found("Profile not found")),
            )
                .into_response()
        }
    };

    match state
        .generate_plan
        .handle(GeneratePlanCommand { profile_id })
        .await
    {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/plan/{profile_id} - fetch the stored plan for a profile
pub async fn get_plan(State(state): State<ApiState>, Path(profile_id): Path<String>) -> Response {
    let profile_id = match profile_id.parse::<ProfileId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::not_found("Plan not found")),
            )
                .into_response()
        }
    };

    match state.get_plan.handle(GetPlanQuery { profile_id }).await {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Maps a domain error to an HTTP response.
///
/// NotFound codes become 404 with the entity message; validation failures
/// become 400; everything else is logged and answered with a generic 500.
fn handle_domain_error(error: DomainError) -> Response {
    if error.code().is_not_found() {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(error.message())),
        )
            .into_response();
    }

    match error.code() {
        ErrorCode::ValidationFailed => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        _ => {
            tracing::error!(code = %error.code(), detail = %error.message(), "request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let error = DomainError::new(ErrorCode::PlanNotFound, "Plan not found");
        let response = handle_domain_error(error);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let error = DomainError::validation("commitment_level", "out of range");
        let response = handle_domain_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_failure_maps_to_500() {
        let error = DomainError::store("connection reset");
        let response = handle_domain_error(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn generation_failure_maps_to_500() {
        let error = DomainError::generation("provider unavailable");
        let response = handle_domain_error(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
