//! Deterministic fallback plan.
//!
//! Used when the generation service answers with something that is not valid
//! structured plan data. The content is fixed apart from three insertions:
//! the user's first yearly goal, the archetype, and the chronotype.

use serde_json::{json, Map, Value};

use crate::domain::profile::UserProfile;
use crate::domain::questionnaire::QuestionnaireSubmission;

use super::PlanData;

/// Builds the fixed template plan from the profile and the raw answers.
pub fn fallback_plan(profile: &UserProfile, answers: &QuestionnaireSubmission) -> PlanData {
    let first_goal = answers
        .yearly_goals
        .first()
        .map(String::as_str)
        .unwrap_or("personal development");

    let weekly_template: Map<String, Value> = [
        ("Monday", "Deep work session"),
        ("Tuesday", "Skill practice"),
        ("Wednesday", "Deep work session"),
        ("Thursday", "Review and adjust"),
        ("Friday", "Creative work"),
        ("Saturday", "Learning and exploration"),
        ("Sunday", "Planning and reflection"),
    ]
    .into_iter()
    .map(|(day, activity)| (day.to_string(), Value::String(activity.to_string())))
    .collect();

    let daily_template: Map<String, Value> = [
        ("morning", "Routine + Planning"),
        ("deep_work", "Focused sessions"),
        ("afternoon", "Tasks and meetings"),
        ("evening", "Reflection + Preparation"),
    ]
    .into_iter()
    .map(|(part, activity)| (part.to_string(), Value::String(activity.to_string())))
    .collect();

    PlanData {
        yearly_goal: format!("Achieve meaningful progress in {first_goal}"),
        pillars: vec![
            "Skill Development".to_string(),
            "Habit Formation".to_string(),
            "Focus Optimization".to_string(),
        ],
        monthly_focus: "Building Foundation".to_string(),
        weekly_template,
        daily_template,
        habit_stack: vec![
            json!({"habit": "Morning planning", "cue": "After coffee", "time": "5 minutes"}),
            json!({"habit": "Focus session", "cue": "After morning planning", "time": "25 minutes"}),
            json!({"habit": "Evening reflection", "cue": "Before dinner", "time": "5 minutes"}),
        ],
        time_blocks: vec![
            json!({
                "name": "Deep Work",
                "time": format!("{} - 90 minutes", answers.chronotype),
                "frequency": "Daily"
            }),
            json!({"name": "Skill Practice", "time": "30 minutes", "frequency": "3x/week"}),
        ],
        accountability_steps: vec![
            "Weekly review of goals".to_string(),
            "Daily habit tracking".to_string(),
            "Monthly progress assessment".to_string(),
        ],
        justification: format!(
            "Plan tailored for {} with focus on building habits and leveraging {} energy.",
            profile.archetype, answers.chronotype
        ),
    }
}
