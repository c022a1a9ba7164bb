//! MongoDB-backed plan repository.

use async_trait::async_trait;
use bson::doc;
use mongodb::options::FindOneOptions;
use mongodb::Collection;

use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::plan::PersonalizedPlan;
use crate::ports::PlanRepository;

use super::MongoStore;

/// Collection name for personalized plans.
pub const PLAN_COLLECTION: &str = "personalized_plans";

/// Plan repository over a MongoDB collection.
#[derive(Clone)]
pub struct MongoPlanRepository {
    collection: Collection<PersonalizedPlan>,
}

impl MongoPlanRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(PLAN_COLLECTION),
        }
    }
}

#[async_trait]
impl PlanRepository for MongoPlanRepository {
    async fn insert(&self, plan: &PersonalizedPlan) -> Result<(), DomainError> {
        self.collection
            .insert_one(plan)
            .await
            .map_err(|e| DomainError::store(format!("plan insert failed: {e}")))?;
        Ok(())
    }

    async fn find_by_profile(
        &self,
        profile_id: ProfileId,
    ) -> Result<Option<PersonalizedPlan>, DomainError> {
        // No uniqueness is enforced on profile_id; resolve duplicates
        // latest-first. created_at is an ISO-8601 string, so lexicographic
        // descending order is chronological descending order.
        let options = FindOneOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        self.collection
            .find_one(doc! { "profile_id": profile_id.to_string() })
            .with_options(options)
            .await
            .map_err(|e| DomainError::store(format!("plan lookup failed: {e}")))
    }
}
