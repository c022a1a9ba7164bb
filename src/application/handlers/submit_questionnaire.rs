//! SubmitQuestionnaire - Command handler for storing questionnaire answers.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::questionnaire::{QuestionnaireAnswer, QuestionnaireSubmission};
use crate::ports::QuestionnaireRepository;

/// Command to submit questionnaire answers.
#[derive(Debug, Clone)]
pub struct SubmitQuestionnaireCommand {
    pub submission: QuestionnaireSubmission,
}

/// Handler for submitting questionnaires.
pub struct SubmitQuestionnaireHandler {
    questionnaires: Arc<dyn QuestionnaireRepository>,
}

impl SubmitQuestionnaireHandler {
    pub fn new(questionnaires: Arc<dyn QuestionnaireRepository>) -> Self {
        Self { questionnaires }
    }

    /// Validates the submission, assigns identity, and persists it.
    pub async fn handle(
        &self,
        cmd: SubmitQuestionnaireCommand,
    ) -> Result<QuestionnaireAnswer, DomainError> {
        let answer = QuestionnaireAnswer::new(cmd.submission)?;
        self.questionnaires.insert(&answer).await?;

        tracing::debug!(questionnaire_id = %answer.id, "questionnaire stored");
        Ok(answer)
    }
}
