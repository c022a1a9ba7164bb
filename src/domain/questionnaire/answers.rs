//! Questionnaire answer entity.
//!
//! The questionnaire is a fixed set of twelve questions. Categorical answers
//! (chronotype, reliable-habits bucket, setback reaction) stay plain strings:
//! every scoring lookup has a documented default for unrecognized values, so
//! the domain accepts whatever the client sent.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, QuestionnaireId, Timestamp};

/// The raw answer fields as submitted by the client.
///
/// Everything is required except `morning_routine_duration`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireSubmission {
    /// Q1: What activities make you feel energized and absorbed for hours?
    pub energizing_activities: String,

    /// Q2: What problems are you passionate about solving?
    pub passionate_problems: String,

    /// Q3: What skills do you already have that you'd like to use or build?
    /// (pick up to 3 — a soft constraint, not enforced here)
    pub existing_skills: Vec<String>,

    /// Q4: How many hours per weekday and weekend day can you realistically
    /// devote to focused work?
    pub weekday_hours: u32,
    pub weekend_hours: u32,

    /// Q5: When are you naturally most alert?
    /// (Early morning, Late morning, Afternoon, Evening, Night)
    pub chronotype: String,

    /// Q6: Do you currently do a morning routine? If yes, list key elements
    /// and duration.
    pub morning_routine: String,
    /// Duration in minutes, when given.
    #[serde(default)]
    pub morning_routine_duration: Option<u32>,

    /// Q7: How many existing daily habits do you reliably keep?
    /// (0, 1-2, 3-4, 5+)
    pub reliable_habits: String,

    /// Q8: How do you react to setbacks?
    /// (give up, try again same way, adjust approach and try again,
    /// learn and iterate immediately)
    pub setback_reaction: String,

    /// Q9: What are 3 outcomes you want to achieve in 12 months?
    pub yearly_goals: Vec<String>,

    /// Q10: What single habit change would make the largest difference?
    pub key_habit_change: String,

    /// Q11: What distractions are your biggest time sinks?
    pub main_distractions: Vec<String>,

    /// Q12: On a scale 1-10, how committed are you to following a new plan?
    pub commitment_level: i32,
}

/// A stored questionnaire: the submission plus identity and creation time.
///
/// Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireAnswer {
    pub id: QuestionnaireId,

    #[serde(flatten)]
    pub answers: QuestionnaireSubmission,

    pub created_at: Timestamp,
}

impl QuestionnaireAnswer {
    /// Creates a new questionnaire entity from a submission.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `commitment_level` falls outside 1-10.
    pub fn new(submission: QuestionnaireSubmission) -> Result<Self, DomainError> {
        if !(1..=10).contains(&submission.commitment_level) {
            return Err(DomainError::validation(
                "commitment_level",
                format!(
                    "must be between 1 and 10, got {}",
                    submission.commitment_level
                ),
            ));
        }

        Ok(Self {
            id: QuestionnaireId::new(),
            answers: submission,
            created_at: Timestamp::now(),
        })
    }
}
