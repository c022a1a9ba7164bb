//! Scoring engine - derives the six-axis readiness profile from answers.
//!
//! Pure, total, and deterministic: every submission maps to six scores, each
//! within its documented clamp range. Keyword matching is case-insensitive
//! substring containment (a keyword may match inside a longer word). That is
//! a deliberate simplicity trade-off kept for score compatibility; switching
//! to word-boundary matching would change results.

use serde::{Deserialize, Serialize};

use crate::domain::questionnaire::QuestionnaireSubmission;

/// Keywords signalling purpose in problem statements and goals.
const PURPOSE_KEYWORDS: &[&str] = &[
    "help", "solve", "create", "build", "improve", "teach", "mentor", "impact",
];

/// Keywords signalling focus-friendly activities.
const FOCUS_KEYWORDS: &[&str] = &[
    "coding", "writing", "design", "research", "study", "create", "build", "analyze",
];

/// Keywords checked for skill/goal alignment.
const ALIGNMENT_KEYWORDS: &[&str] = &[
    "design", "code", "write", "teach", "manage", "create", "build",
];

/// The six-axis readiness profile, each axis within its clamp range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisScores {
    /// From Q2 + Q9, in [0, 100]
    pub purpose_clarity: u8,
    /// From Q5 + Q6 + Q4, in [30, 100] (lowest chronotype base is 30)
    pub energy_chronotype: u8,
    /// From Q1 + Q4 + Q11, in [20, 100]
    pub focus_capacity: u8,
    /// From Q7 + Q10, in [10, 100]
    pub habit_foundation: u8,
    /// From Q8 + Q12, in [10, 100]
    pub mindset_resilience: u8,
    /// From Q3 + Q9, in [0, 100]
    pub skill_trajectory: u8,
}

/// Calculates the six axis scores from questionnaire answers.
pub fn calculate_scores(answers: &QuestionnaireSubmission) -> AxisScores {
    AxisScores {
        purpose_clarity: purpose_clarity(answers),
        energy_chronotype: energy_chronotype(answers),
        focus_capacity: focus_capacity(answers),
        habit_foundation: habit_foundation(answers),
        mindset_resilience: mindset_resilience(answers),
        skill_trajectory: skill_trajectory(answers),
    }
}

/// Counts how many keywords occur (as substrings) in the lowercased text.
fn keyword_matches(text: &str, keywords: &[&str]) -> i64 {
    let text = text.to_lowercase();
    keywords.iter().filter(|k| text.contains(**k)).count() as i64
}

fn clamp_score(value: i64, min: i64) -> u8 {
    value.clamp(min, 100) as u8
}

/// Purpose clarity: keyword matches in problems + goals, plus goal count.
fn purpose_clarity(answers: &QuestionnaireSubmission) -> u8 {
    let combined = format!(
        "{} {}",
        answers.passionate_problems,
        answers.yearly_goals.join(" ")
    );
    let matches = keyword_matches(&combined, PURPOSE_KEYWORDS);
    let score = matches * 20 + answers.yearly_goals.len() as i64 * 15;
    clamp_score(score, 0)
}

/// Energy & chronotype: base from the chronotype table, morning-routine
/// bonus, and weekly time availability.
fn energy_chronotype(answers: &QuestionnaireSubmission) -> u8 {
    let base: i64 = match answers.chronotype.as_str() {
        "Early morning" => 90,
        "Late morning" => 75,
        "Afternoon" => 60,
        "Evening" => 45,
        "Night" => 30,
        _ => 50,
    };

    let mut score = base;

    let routine = answers.morning_routine.trim();
    if !routine.is_empty() && routine.to_lowercase() != "no" {
        score += 20;
    }

    let weekly_time = i64::from(answers.weekday_hours) * 5 + i64::from(answers.weekend_hours) * 2;
    if weekly_time >= 25 {
        score += 10;
    } else if weekly_time >= 15 {
        score += 5;
    }

    // Only an upper clamp: the chronotype table already sets the floor.
    score.min(100) as u8
}

/// Focus capacity: energizing-activity keywords, weekday time, minus a
/// penalty per distraction.
fn focus_capacity(answers: &QuestionnaireSubmission) -> u8 {
    let mut score = keyword_matches(&answers.energizing_activities, FOCUS_KEYWORDS) * 15;

    score += match answers.weekday_hours {
        h if h >= 4 => 30,
        h if h >= 2 => 20,
        h if h >= 1 => 10,
        _ => 0,
    };

    score -= answers.main_distractions.len() as i64 * 5;

    clamp_score(score, 20)
}

/// Habit foundation: reliable-habits bucket plus a concrete-change bonus.
fn habit_foundation(answers: &QuestionnaireSubmission) -> u8 {
    let base: i64 = match answers.reliable_habits.as_str() {
        "0" => 10,
        "1-2" => 35,
        "3-4" => 65,
        "5+" => 90,
        _ => 35,
    };

    let mut score = base;
    if answers.key_habit_change.trim().len() > 10 {
        score += 15;
    }

    score.min(100) as u8
}

/// Mindset resilience: setback-reaction base plus the commitment bonus.
fn mindset_resilience(answers: &QuestionnaireSubmission) -> u8 {
    let base: i64 = match answers.setback_reaction.as_str() {
        "give up" => 20,
        "try again same way" => 40,
        "adjust approach and try again" => 75,
        "learn and iterate immediately" => 95,
        _ => 50,
    };

    let score = base + (i64::from(answers.commitment_level) - 5) * 5;
    clamp_score(score, 10)
}

/// Skill trajectory: skill count plus a capped skill/goal alignment bonus.
fn skill_trajectory(answers: &QuestionnaireSubmission) -> u8 {
    let mut score = answers.existing_skills.len() as i64 * 20;

    let skills_text = answers.existing_skills.join(" ").to_lowercase();
    let goals_text = answers.yearly_goals.join(" ").to_lowercase();

    let alignment: i64 = ALIGNMENT_KEYWORDS
        .iter()
        .filter(|k| skills_text.contains(**k) && goals_text.contains(**k))
        .count() as i64
        * 10;

    score += alignment.min(40);
    score.min(100) as u8
}
