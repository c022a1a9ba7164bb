//! ProfileRepository port for profile persistence

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::profile::UserProfile;

/// Repository for derived user profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Insert a new profile document.
    async fn insert(&self, profile: &UserProfile) -> Result<(), DomainError>;

    /// Find a profile by its id.
    async fn find_by_id(&self, id: ProfileId) -> Result<Option<UserProfile>, DomainError>;
}
