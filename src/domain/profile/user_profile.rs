//! User profile entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProfileId, QuestionnaireId, Timestamp};
use crate::domain::questionnaire::QuestionnaireAnswer;

use super::{calculate_scores, determine_archetype, Archetype, AxisScores};

/// Derived six-axis profile for one questionnaire submission.
///
/// Immutable after creation. Re-deriving from the same questionnaire creates
/// a new profile with a new id; no uniqueness is enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: ProfileId,
    pub questionnaire_id: QuestionnaireId,

    #[serde(flatten)]
    pub scores: AxisScores,

    pub archetype: Archetype,
    pub created_at: Timestamp,
}

impl UserProfile {
    /// Derives a profile from a stored questionnaire: runs the scoring engine
    /// and the archetype classifier.
    pub fn derive(questionnaire: &QuestionnaireAnswer) -> Self {
        let scores = calculate_scores(&questionnaire.answers);
        let archetype = determine_archetype(&scores);

        Self {
            id: ProfileId::new(),
            questionnaire_id: questionnaire.id,
            scores,
            archetype,
            created_at: Timestamp::now(),
        }
    }
}
