//! Plan module - the personalized plan entity, the LLM output contract, the
//! prompt builder, and the deterministic fallback generator.

mod fallback;
mod personalized_plan;
mod prompt;

pub use fallback::fallback_plan;
pub use personalized_plan::{PersonalizedPlan, PlanData};
pub use prompt::{build_plan_prompt, PLAN_SYSTEM_PROMPT};
