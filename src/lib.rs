//! LifePlan Coach - Productivity Coaching Backend
//!
//! This crate turns a fixed 12-question questionnaire into a six-axis
//! readiness profile, classifies the user into an archetype, and produces a
//! personalized yearly/monthly/weekly/daily plan through an LLM service with
//! a deterministic fallback.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
