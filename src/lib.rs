//! Stack Advisor
//!
//! A deterministic tech-stack recommendation engine:
//! - Typed questionnaire input with completeness validation
//! - Read-only knowledge base of profiles, adjustments and checklists
//! - Pure recommendation builder with bounded scores
//! - Markdown / HTML / JSON presentation
//! - CLI and HTTP front ends

pub mod cli;
pub mod config;
pub mod engine;
pub mod input;
pub mod knowledge;
pub mod render;
pub mod server;
pub mod utils;

// Re-exports for convenience
pub use config::AdvisorConfig;
pub use engine::{build_recommendation, recommend, RecommendationEngine, RecommendationRecord};
pub use input::{InputError, ProjectInput};
pub use knowledge::KnowledgeBase;
