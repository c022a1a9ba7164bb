//! Personalized plan entity and the structured plan-data contract.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{PlanId, ProfileId, Timestamp};

/// The nine plan fields the generation service must return.
///
/// The field names are a contract shared with the prompt builder: the prompt
/// names them verbatim and this struct parses them back. All nine must be
/// present; unknown extra fields from the model are ignored.
///
/// The template and stack fields are loosely typed on purpose — the source
/// system never fixed a schema for them beyond "JSON-shaped".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanData {
    pub yearly_goal: String,
    pub pillars: Vec<String>,
    pub monthly_focus: String,
    pub weekly_template: Map<String, Value>,
    pub daily_template: Map<String, Value>,
    pub habit_stack: Vec<Value>,
    pub time_blocks: Vec<Value>,
    pub accountability_steps: Vec<String>,
    pub justification: String,
}

impl PlanData {
    /// Parses a generation-service response as structured plan data.
    ///
    /// # Errors
    ///
    /// Returns the underlying JSON error when the text is not a JSON object
    /// with the nine expected fields in their expected shapes. Callers treat
    /// that as the signal to fall back, never as a user-facing failure.
    pub fn parse(response: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(response)
    }
}

/// Stored personalized plan for one profile.
///
/// Immutable after creation. Generating again for the same profile inserts a
/// new document; the fetch path resolves duplicates latest-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalizedPlan {
    pub id: PlanId,
    pub profile_id: ProfileId,

    #[serde(flatten)]
    pub data: PlanData,

    pub created_at: Timestamp,
}

impl PersonalizedPlan {
    /// Creates a plan entity from generated (or fallback) plan data.
    pub fn new(profile_id: ProfileId, data: PlanData) -> Self {
        Self {
            id: PlanId::new(),
            profile_id,
            data,
            created_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_plan_json() -> serde_json::Value {
        json!({
            "yearly_goal": "Ship the course",
            "pillars": ["Skill", "Habit", "Focus"],
            "monthly_focus": "Foundation",
            "weekly_template": {"Monday": "Deep work"},
            "daily_template": {"morning": "Routine"},
            "habit_stack": [{"habit": "Plan", "cue": "Coffee", "time": "5 minutes"}],
            "time_blocks": [{"name": "Deep Work", "time": "06:00", "frequency": "Daily"}],
            "accountability_steps": ["Weekly review"],
            "justification": "Matches the profile"
        })
    }

    #[test]
    fn parse_accepts_all_nine_fields() {
        let data = PlanData::parse(&full_plan_json().to_string()).unwrap();
        assert_eq!(data.yearly_goal, "Ship the course");
        assert_eq!(data.pillars.len(), 3);
        assert_eq!(data.habit_stack.len(), 1);
    }

    #[test]
    fn parse_rejects_missing_field() {
        let mut json = full_plan_json();
        json.as_object_mut().unwrap().remove("justification");
        assert!(PlanData::parse(&json.to_string()).is_err());
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        let mut json = full_plan_json();
        json["pillars"] = json!("not a list");
        assert!(PlanData::parse(&json.to_string()).is_err());
    }

    #[test]
    fn parse_ignores_unknown_fields() {
        let mut json = full_plan_json();
        json.as_object_mut()
            .unwrap()
            .insert("extra_commentary".to_string(), json!("ignored"));
        assert!(PlanData::parse(&json.to_string()).is_ok());
    }

    #[test]
    fn parse_rejects_prose() {
        let err = PlanData::parse("Here is your plan! 1. Wake early...");
        assert!(err.is_err());
    }

    #[test]
    fn plan_serializes_flat() {
        let data = PlanData::parse(&full_plan_json().to_string()).unwrap();
        let plan = PersonalizedPlan::new(ProfileId::new(), data);
        let json = serde_json::to_value(&plan).unwrap();

        assert!(json.get("id").is_some());
        assert!(json.get("profile_id").is_some());
        assert!(json.get("yearly_goal").is_some());
        assert!(json.get("weekly_template").is_some());
        assert!(json.get("data").is_none());
    }

    #[test]
    fn plan_roundtrips_through_json() {
        let data = PlanData::parse(&full_plan_json().to_string()).unwrap();
        let plan = PersonalizedPlan::new(ProfileId::new(), data.clone());

        let json = serde_json::to_string(&plan).unwrap();
        let back: PersonalizedPlan = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, plan.id);
        assert_eq!(back.profile_id, plan.profile_id);
        assert_eq!(back.data, data);
        assert_eq!(back.created_at, plan.created_at);
    }
}
