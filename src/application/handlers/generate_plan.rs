//! GeneratePlan - Command handler for producing a personalized plan.
//!
//! Builds the coaching prompt, calls the generation service once, and parses
//! the response as structured plan data. A response that is not valid plan
//! data takes the deterministic fallback path and is never an error; a
//! failing service call surfaces as a generation failure. Neither path
//! retries.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId};
use crate::domain::plan::{
    build_plan_prompt, fallback_plan, PersonalizedPlan, PlanData, PLAN_SYSTEM_PROMPT,
};
use crate::ports::{
    AIProvider, CompletionRequest, MessageRole, PlanRepository, ProfileRepository,
    QuestionnaireRepository,
};

/// Command to generate a plan for an existing profile.
#[derive(Debug, Clone)]
pub struct GeneratePlanCommand {
    pub profile_id: ProfileId,
}

/// Handler for generating plans.
pub struct GeneratePlanHandler {
    profiles: Arc<dyn ProfileRepository>,
    questionnaires: Arc<dyn QuestionnaireRepository>,
    plans: Arc<dyn PlanRepository>,
    ai: Arc<dyn AIProvider>,
}

impl GeneratePlanHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        questionnaires: Arc<dyn QuestionnaireRepository>,
        plans: Arc<dyn PlanRepository>,
        ai: Arc<dyn AIProvider>,
    ) -> Self {
        Self {
            profiles,
            questionnaires,
            plans,
            ai,
        }
    }

    pub async fn handle(&self, cmd: GeneratePlanCommand) -> Result<PersonalizedPlan, DomainError> {
        let profile = self
            .profiles
            .find_by_id(cmd.profile_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "Profile not found"))?;

        // A profile always references a stored questionnaire; a dangling
        // reference is corrupt data, not a caller error.
        let questionnaire = self
            .questionnaires
            .find_by_id(profile.questionnaire_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!(
                        "questionnaire {} referenced by profile {} is missing",
                        profile.questionnaire_id, profile.id
                    ),
                )
            })?;

        let prompt = build_plan_prompt(&profile, &questionnaire);
        let request = CompletionRequest::new()
            .with_system_prompt(PLAN_SYSTEM_PROMPT)
            .with_message(MessageRole::User, prompt);

        let response = self
            .ai
            .complete(request)
            .await
            .map_err(|e| DomainError::generation(e.to_string()))?;

        tracing::debug!(
            model = %response.model,
            total_tokens = response.usage.total_tokens,
            "plan generation completed"
        );

        let data = match PlanData::parse(&response.content) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(
                    profile_id = %profile.id,
                    error = %e,
                    "generation response was not structured plan data, using fallback plan"
                );
                fallback_plan(&profile, &questionnaire.answers)
            }
        };

        let plan = PersonalizedPlan::new(profile.id, data);
        self.plans.insert(&plan).await?;

        tracing::debug!(plan_id = %plan.id, profile_id = %profile.id, "plan stored");
        Ok(plan)
    }
}
