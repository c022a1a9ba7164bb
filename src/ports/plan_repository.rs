//! PlanRepository port for plan persistence

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProfileId};
use crate::domain::plan::PersonalizedPlan;

/// Repository for personalized plans.
///
/// Plans are additionally queryable by profile id. No uniqueness is enforced:
/// repeated generation inserts additional documents, and lookup resolves
/// latest-first.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Insert a new plan document.
    async fn insert(&self, plan: &PersonalizedPlan) -> Result<(), DomainError>;

    /// Find the most recently created plan for a profile.
    async fn find_by_profile(
        &self,
        profile_id: ProfileId,
    ) -> Result<Option<PersonalizedPlan>, DomainError>;
}
