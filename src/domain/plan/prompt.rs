//! Plan prompt builder.
//!
//! Formats the derived profile and the raw answers into the natural-language
//! brief sent to the generation service. The nine JSON keys named at the end
//! are a verbatim contract with [`super::PlanData`].

use crate::domain::profile::UserProfile;
use crate::domain::questionnaire::QuestionnaireAnswer;

/// Fixed coaching persona for the generation service.
pub const PLAN_SYSTEM_PROMPT: &str = "You are an evidence-based productivity coach synthesizing ideas from Ikigai, 5AM Club, Atomic Habits, Deep Work, and Designing Your Life.

Produce concise, actionable Year/Monthly/Weekly/Daily plans based on a 6-axis user profile. Output must be in structured JSON format.

Focus on creating progressive, achievable plans that build momentum. Keep language encouraging and pragmatic.";

/// Builds the user prompt embedding all six scores, the archetype, and the
/// twelve raw answers.
pub fn build_plan_prompt(profile: &UserProfile, questionnaire: &QuestionnaireAnswer) -> String {
    let answers = &questionnaire.answers;
    format!(
        "
User Profile Analysis:
- Purpose Clarity: {purpose}/100
- Energy & Chronotype: {energy}/100
- Focus Capacity: {focus}/100
- Habit Foundation: {habit}/100
- Mindset Resilience: {mindset}/100
- Skill Trajectory: {skill}/100
- Archetype: {archetype}

User Responses:
- Energizing Activities: {energizing}
- Passionate Problems: {problems}
- Existing Skills: {skills}
- Available Time: {weekday}h weekdays, {weekend}h weekends
- Natural Alert Time: {chronotype}
- Morning Routine: {routine}
- Current Habits: {habits}
- Setback Response: {setback}
- 12-Month Goals: {goals}
- Key Habit Change: {habit_change}
- Main Distractions: {distractions}
- Commitment Level: {commitment}/10

Create a comprehensive productivity roadmap with:
1. One clear yearly goal
2. Three supporting pillars
3. Monthly focus theme
4. Weekly schedule template
5. Daily routine structure
6. Habit stack (3-5 micro-habits)
7. Specific time blocks based on their chronotype
8. Accountability measures

Format as JSON with these exact keys: yearly_goal, pillars, monthly_focus, weekly_template, daily_template, habit_stack, time_blocks, accountability_steps, justification
",
        purpose = profile.scores.purpose_clarity,
        energy = profile.scores.energy_chronotype,
        focus = profile.scores.focus_capacity,
        habit = profile.scores.habit_foundation,
        mindset = profile.scores.mindset_resilience,
        skill = profile.scores.skill_trajectory,
        archetype = profile.archetype,
        energizing = answers.energizing_activities,
        problems = answers.passionate_problems,
        skills = answers.existing_skills.join(", "),
        weekday = answers.weekday_hours,
        weekend = answers.weekend_hours,
        chronotype = answers.chronotype,
        routine = answers.morning_routine,
        habits = answers.reliable_habits,
        setback = answers.setback_reaction,
        goals = answers.yearly_goals.join(", "),
        habit_change = answers.key_habit_change,
        distractions = answers.main_distractions.join(", "),
        commitment = answers.commitment_level,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::test_support::sample_submission;

    fn sample_profile() -> (UserProfile, QuestionnaireAnswer) {
        let questionnaire = QuestionnaireAnswer::new(sample_submission()).unwrap();
        let profile = UserProfile::derive(&questionnaire);
        (profile, questionnaire)
    }

    #[test]
    fn prompt_embeds_all_scores_and_archetype() {
        let (profile, questionnaire) = sample_profile();
        let prompt = build_plan_prompt(&profile, &questionnaire);

        assert!(prompt.contains(&format!(
            "Purpose Clarity: {}/100",
            profile.scores.purpose_clarity
        )));
        assert!(prompt.contains(&format!(
            "Skill Trajectory: {}/100",
            profile.scores.skill_trajectory
        )));
        assert!(prompt.contains(&format!("Archetype: {}", profile.archetype)));
    }

    #[test]
    fn prompt_embeds_all_answers() {
        let (profile, questionnaire) = sample_profile();
        let prompt = build_plan_prompt(&profile, &questionnaire);
        let answers = &questionnaire.answers;

        assert!(prompt.contains(&answers.energizing_activities));
        assert!(prompt.contains(&answers.passionate_problems));
        assert!(prompt.contains("Programming, Design"));
        assert!(prompt.contains("2h weekdays, 4h weekends"));
        assert!(prompt.contains(&answers.chronotype));
        assert!(prompt.contains(&answers.morning_routine));
        assert!(prompt.contains(&answers.reliable_habits));
        assert!(prompt.contains(&answers.setback_reaction));
        assert!(prompt.contains("Launch online course, Build an audience"));
        assert!(prompt.contains(&answers.key_habit_change));
        assert!(prompt.contains("Social media"));
        assert!(prompt.contains("Commitment Level: 8/10"));
    }

    #[test]
    fn prompt_names_the_nine_contract_keys() {
        let (profile, questionnaire) = sample_profile();
        let prompt = build_plan_prompt(&profile, &questionnaire);

        assert!(prompt.contains(
            "yearly_goal, pillars, monthly_focus, weekly_template, daily_template, \
             habit_stack, time_blocks, accountability_steps, justification"
        ));
    }

    #[test]
    fn system_prompt_sets_coaching_persona() {
        assert!(PLAN_SYSTEM_PROMPT.contains("productivity coach"));
        assert!(PLAN_SYSTEM_PROMPT.contains("structured JSON format"));
    }
}
