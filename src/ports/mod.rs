//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - plan text generation (LLM service)
//! - `QuestionnaireRepository` / `ProfileRepository` / `PlanRepository` -
//!   document-store collections (insert-one, find-one-by-field)

mod ai_provider;
mod plan_repository;
mod profile_repository;
mod questionnaire_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, TokenUsage,
};
pub use plan_repository::PlanRepository;
pub use profile_repository::ProfileRepository;
pub use questionnaire_repository::QuestionnaireRepository;
