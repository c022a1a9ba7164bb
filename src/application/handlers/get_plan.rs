//! GetPlan - Query handler for fetching the stored plan of a profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId};
use crate::domain::plan::PersonalizedPlan;
use crate::ports::PlanRepository;

/// Query for the plan belonging to a profile.
#[derive(Debug, Clone)]
pub struct GetPlanQuery {
    pub profile_id: ProfileId,
}

/// Handler for fetching plans.
pub struct GetPlanHandler {
    plans: Arc<dyn PlanRepository>,
}

impl GetPlanHandler {
    pub fn new(plans: Arc<dyn PlanRepository>) -> Self {
        Self { plans }
    }

    /// Returns the most recently stored plan for the profile.
    pub async fn handle(&self, query: GetPlanQuery) -> Result<PersonalizedPlan, DomainError> {
        self.plans
            .find_by_profile(query.profile_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::PlanNotFound, "Plan not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::PlanData;
    use async_trait::async_trait;
    use serde_json::Map;
    use std::sync::Mutex;

    struct MockPlanRepository {
        stored: Mutex<Vec<PersonalizedPlan>>,
    }

    #[async_trait]
    impl PlanRepository for MockPlanRepository {
        async fn insert(&self, plan: &PersonalizedPlan) -> Result<(), DomainError> {
            self.stored.lock().unwrap().push(plan.clone());
            Ok(())
        }

        async fn find_by_profile(
            &self,
            profile_id: ProfileId,
        ) -> Result<Option<PersonalizedPlan>, DomainError> {
            Ok(self
                .stored
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.profile_id == profile_id)
                .max_by_key(|p| p.created_at)
                .cloned())
        }
    }

    fn minimal_plan_data(goal: &str) -> PlanData {
        PlanData {
            yearly_goal: goal.to_string(),
            pillars: vec![],
            monthly_focus: String::new(),
            weekly_template: Map::new(),
            daily_template: Map::new(),
            habit_stack: vec![],
            time_blocks: vec![],
            accountability_steps: vec![],
            justification: String::new(),
        }
    }

    #[tokio::test]
    async fn get_plan_returns_stored_plan() {
        let profile_id = ProfileId::new();
        let plan = PersonalizedPlan::new(profile_id, minimal_plan_data("goal"));
        let repo = Arc::new(MockPlanRepository {
            stored: Mutex::new(vec![plan.clone()]),
        });
        let handler = GetPlanHandler::new(repo);

        let found = handler.handle(GetPlanQuery { profile_id }).await.unwrap();
        assert_eq!(found.id, plan.id);
    }

    #[tokio::test]
    async fn get_plan_missing_is_not_found() {
        let repo = Arc::new(MockPlanRepository {
            stored: Mutex::new(Vec::new()),
        });
        let handler = GetPlanHandler::new(repo);

        let err = handler
            .handle(GetPlanQuery {
                profile_id: ProfileId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::PlanNotFound);
    }

    #[tokio::test]
    async fn get_plan_prefers_latest_duplicate() {
        let profile_id = ProfileId::new();
        let older = PersonalizedPlan::new(profile_id, minimal_plan_data("older"));
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let newer = PersonalizedPlan::new(profile_id, minimal_plan_data("newer"));

        let repo = Arc::new(MockPlanRepository {
            stored: Mutex::new(vec![older, newer.clone()]),
        });
        let handler = GetPlanHandler::new(repo);

        let found = handler.handle(GetPlanQuery { profile_id }).await.unwrap();
        assert_eq!(found.id, newer.id);
        assert_eq!(found.data.yearly_goal, "newer");
    }
}
