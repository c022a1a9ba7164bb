//! MongoDB-backed profile repository.

use async_trait::async_trait;
use bson::doc;
use mongodb::Collection;

use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::profile::UserProfile;
use crate::ports::ProfileRepository;

use super::MongoStore;

/// Collection name for user profiles.
pub const PROFILE_COLLECTION: &str = "user_profiles";

/// Profile repository over a MongoDB collection.
#[derive(Clone)]
pub struct MongoProfileRepository {
    collection: Collection<UserProfile>,
}

impl MongoProfileRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(PROFILE_COLLECTION),
        }
    }
}

#[async_trait]
impl ProfileRepository for MongoProfileRepository {
    async fn insert(&self, profile: &UserProfile) -> Result<(), DomainError> {
        self.collection
            .insert_one(profile)
            .await
            .map_err(|e| DomainError::store(format!("profile insert failed: {e}")))?;
        Ok(())
    }

    async fn find_by_id(&self, id: ProfileId) -> Result<Option<UserProfile>, DomainError> {
        self.collection
            .find_one(doc! { "id": id.to_string() })
            .await
            .map_err(|e| DomainError::store(format!("profile lookup failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::PROFILE_COLLECTION;

    #[test]
    fn collection_name_matches_store_layout() {
        assert_eq!(PROFILE_COLLECTION, "user_profiles");
    }
}
