//! QuestionnaireRepository port for questionnaire persistence

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, QuestionnaireId};
use crate::domain::questionnaire::QuestionnaireAnswer;

/// Repository for stored questionnaire answers.
///
/// The backing store is a document collection: insert-one and
/// find-one-by-field, nothing more.
#[async_trait]
pub trait QuestionnaireRepository: Send + Sync {
    /// Insert a new questionnaire document.
    async fn insert(&self, answer: &QuestionnaireAnswer) -> Result<(), DomainError>;

    /// Find a questionnaire by its id.
    async fn find_by_id(
        &self,
        id: QuestionnaireId,
    ) -> Result<Option<QuestionnaireAnswer>, DomainError>;
}
