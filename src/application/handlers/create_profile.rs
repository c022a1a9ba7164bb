//! CreateProfile - Command handler for deriving a profile from a stored
//! questionnaire.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, QuestionnaireId};
use crate::domain::profile::UserProfile;
use crate::ports::{ProfileRepository, QuestionnaireRepository};

/// Command to create a profile for a previously submitted questionnaire.
#[derive(Debug, Clone)]
pub struct CreateProfileCommand {
    pub questionnaire_id: QuestionnaireId,
}

/// Handler for creating profiles.
pub struct CreateProfileHandler {
    questionnaires: Arc<dyn QuestionnaireRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl CreateProfileHandler {
    pub fn new(
        questionnaires: Arc<dyn QuestionnaireRepository>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            questionnaires,
            profiles,
        }
    }

    /// Loads the questionnaire, runs scoring and classification, and persists
    /// the resulting profile.
    ///
    /// Re-invoking for the same questionnaire creates a new profile; no
    /// uniqueness is enforced at any layer.
    pub async fn handle(&self, cmd: CreateProfileCommand) -> Result<UserProfile, DomainError> {
        let questionnaire = self
            .questionnaires
            .find_by_id(cmd.questionnaire_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::QuestionnaireNotFound, "Questionnaire not found")
            })?;

        let profile = UserProfile::derive(&questionnaire);
        self.profiles.insert(&profile).await?;

        tracing::debug!(
            profile_id = %profile.id,
            archetype = %profile.archetype,
            "profile created"
        );
        Ok(profile)
    }
}
