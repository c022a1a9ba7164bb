//! HTTP adapter - the REST API surface.
//!
//! Four operations under the `/api` prefix plus a root message endpoint,
//! with CORS, tracing, and a request timeout layered on top.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateProfileParams, ErrorResponse, GeneratePlanParams, MessageResponse};
pub use handlers::ApiState;
pub use routes::api_router;
