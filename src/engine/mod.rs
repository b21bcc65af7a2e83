//! Engine Module
//!
//! The pure `ProjectInput -> RecommendationRecord` transformation plus the
//! scoring functions it uses.

mod builder;
mod record;
pub mod scoring;

pub use builder::{
    RecommendationEngine, AGENTIC_ARCHITECTURE_GUIDANCE, AGENTS_DEVOPS_ADVICE,
    AI_TOOLING_CHECKLIST, DEFAULT_DEVOPS_GUIDANCE, DEFAULT_SECURITY_NOTES,
    PERSONAL_SHIP_FAST_GUIDANCE, SCALABLE_LONG_TERM_GUIDANCE, VIBE_DEVOPS_ADVICE,
};
pub use record::{Metrics, RecommendationRecord};
pub use scoring::{score_complexity, score_cost, score_risk};

use crate::input::{InputError, ProjectInput};
use crate::knowledge::KnowledgeBase;

/// Build against the built-in knowledge base without validation.
pub fn build_recommendation(input: &ProjectInput) -> RecommendationRecord {
    RecommendationEngine::default().build(input)
}

/// Validate, normalise and build. This is the entry point collectors use.
pub fn recommend(
    input: &ProjectInput,
    kb: &KnowledgeBase,
) -> Result<RecommendationRecord, InputError> {
    input.validate()?;
    Ok(RecommendationEngine::new(kb).build(&input.normalized()))
}
