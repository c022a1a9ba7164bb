//! Archetype classifier - maps axis scores to one of three archetypes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::AxisScores;

/// Coarse user classification derived from the six axis scores.
///
/// Serialized as the exact display labels, which are part of the API and
/// prompt contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    #[serde(rename = "Purpose-driven Achiever")]
    PurposeDrivenAchiever,
    #[serde(rename = "Foundation Builder")]
    FoundationBuilder,
    #[serde(rename = "Strategic Explorer")]
    StrategicExplorer,
}

impl Archetype {
    /// Returns the display label for this archetype.
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::PurposeDrivenAchiever => "Purpose-driven Achiever",
            Archetype::FoundationBuilder => "Foundation Builder",
            Archetype::StrategicExplorer => "Strategic Explorer",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Determines the archetype from axis scores.
///
/// Total over all score combinations; rule order is significant (the first
/// matching rule wins, and Strategic Explorer is the fallback bucket).
pub fn determine_archetype(scores: &AxisScores) -> Archetype {
    if scores.purpose_clarity >= 70 && scores.energy_chronotype >= 70 && scores.focus_capacity >= 60
    {
        Archetype::PurposeDrivenAchiever
    } else if scores.habit_foundation < 40 && scores.mindset_resilience >= 60 {
        Archetype::FoundationBuilder
    } else {
        Archetype::StrategicExplorer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(
        purpose: u8,
        energy: u8,
        focus: u8,
        habit: u8,
        mindset: u8,
        skill: u8,
    ) -> AxisScores {
        AxisScores {
            purpose_clarity: purpose,
            energy_chronotype: energy,
            focus_capacity: focus,
            habit_foundation: habit,
            mindset_resilience: mindset,
            skill_trajectory: skill,
        }
    }

    #[test]
    fn high_purpose_energy_focus_is_achiever() {
        let s = scores(70, 70, 60, 90, 90, 50);
        assert_eq!(determine_archetype(&s), Archetype::PurposeDrivenAchiever);
    }

    #[test]
    fn rule_order_is_significant() {
        // Both rule 1 and rule 2 match; rule 1 fires first.
        let s = scores(80, 80, 70, 10, 90, 50);
        assert_eq!(determine_archetype(&s), Archetype::PurposeDrivenAchiever);
    }

    #[test]
    fn weak_habits_with_resilience_is_foundation_builder() {
        let s = scores(50, 50, 50, 39, 60, 50);
        assert_eq!(determine_archetype(&s), Archetype::FoundationBuilder);
    }

    #[test]
    fn everything_else_is_strategic_explorer() {
        let s = scores(50, 50, 50, 40, 50, 50);
        assert_eq!(determine_archetype(&s), Archetype::StrategicExplorer);

        // Low resilience never reaches Foundation Builder.
        let s = scores(10, 10, 20, 10, 59, 0);
        assert_eq!(determine_archetype(&s), Archetype::StrategicExplorer);
    }

    #[test]
    fn boundary_just_below_rule_one_falls_through() {
        let s = scores(69, 100, 100, 80, 80, 80);
        assert_eq!(determine_archetype(&s), Archetype::StrategicExplorer);

        let s = scores(100, 69, 100, 80, 80, 80);
        assert_eq!(determine_archetype(&s), Archetype::StrategicExplorer);

        let s = scores(100, 100, 59, 80, 80, 80);
        assert_eq!(determine_archetype(&s), Archetype::StrategicExplorer);
    }

    #[test]
    fn label_serializes_verbatim() {
        let json = serde_json::to_string(&Archetype::PurposeDrivenAchiever).unwrap();
        assert_eq!(json, "\"Purpose-driven Achiever\"");

        let back: Archetype = serde_json::from_str("\"Foundation Builder\"").unwrap();
        assert_eq!(back, Archetype::FoundationBuilder);
    }

    #[test]
    fn display_matches_serde_label() {
        for archetype in [
            Archetype::PurposeDrivenAchiever,
            Archetype::FoundationBuilder,
            Archetype::StrategicExplorer,
        ] {
            let json = serde_json::to_string(&archetype).unwrap();
            assert_eq!(json, format!("\"{}\"", archetype));
        }
    }
}
