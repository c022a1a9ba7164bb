//! MongoDB-backed questionnaire repository.

use async_trait::async_trait;
use bson::doc;
use mongodb::Collection;

use crate::domain::foundation::{DomainError, QuestionnaireId};
use crate::domain::questionnaire::QuestionnaireAnswer;
use crate::ports::QuestionnaireRepository;

use super::MongoStore;

/// Collection name for questionnaire answers.
pub const QUESTIONNAIRE_COLLECTION: &str = "questionnaire_answers";

/// Questionnaire repository over a MongoDB collection.
#[derive(Clone)]
pub struct MongoQuestionnaireRepository {
    collection: Collection<QuestionnaireAnswer>,
}

impl MongoQuestionnaireRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(QUESTIONNAIRE_COLLECTION),
        }
    }
}

#[async_trait]
impl QuestionnaireRepository for MongoQuestionnaireRepository {
    async fn insert(&self, answer: &QuestionnaireAnswer) -> Result<(), DomainError> {
        self.collection
            .insert_one(answer)
            .await
            .map_err(|e| DomainError::store(format!("questionnaire insert failed: {e}")))?;
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: QuestionnaireId,
    ) -> Result<Option<QuestionnaireAnswer>, DomainError> {
        self.collection
            .find_one(doc! { "id": id.to_string() })
            .await
            .map_err(|e| DomainError::store(format!("questionnaire lookup failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    // Exercising these repositories needs a running MongoDB; the handler and
    // integration tests cover the port contract with in-memory fakes.
    use super::QUESTIONNAIRE_COLLECTION;

    #[test]
    fn collection_name_matches_store_layout() {
        assert_eq!(QUESTIONNAIRE_COLLECTION, "questionnaire_answers");
    }
}
