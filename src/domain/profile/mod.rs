//! Profile module - six-axis scoring, archetype classification, and the
//! derived user profile entity.

mod archetype;
mod scoring;
mod user_profile;

pub use archetype::{determine_archetype, Archetype};
pub use user_profile::UserProfile;
pub use scoring::{calculate_scores, AxisScores};
