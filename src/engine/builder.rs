//! Recommendation model builder.
//!
//! Merges a base profile, the three adjustment tables and the scores into a
//! [`RecommendationRecord`]. The step order below matters: the team-skill
//! architecture override must land before any conditional text is appended.

use std::collections::HashSet;
use tracing::debug;

use super::record::{Metrics, RecommendationRecord};
use super::scoring::{score_complexity, score_cost, score_risk};
use crate::input::{AiAssistance, Goal, ProjectInput, ProjectType};
use crate::knowledge::KnowledgeBase;

pub const SCALABLE_LONG_TERM_GUIDANCE: &str = "Favor clear domain modules and early separation of concerns. Use asynchronous processing (queues, workers) for slow operations.";
pub const PERSONAL_SHIP_FAST_GUIDANCE: &str =
    "Cut anything non-essential. Use opinionated frameworks and hosted DBs to move quickly.";
pub const AGENTIC_ARCHITECTURE_GUIDANCE: &str = "Design for agentic workflows: keep context clear, use modular files, and ensure strong typing to help agents reason about code.";

pub const DEFAULT_DEVOPS_GUIDANCE: [&str; 3] = [
    "Use your hosting provider’s built-in CI/CD or GitHub Actions.",
    "Add basic health checks and uptime monitoring.",
    "Keep deployments simple: one environment to start, then add staging.",
];
pub const AGENTS_DEVOPS_ADVICE: &str = "Setup agentic workflows (e.g., automated PR reviews, test generation, and self-healing scripts).";
pub const VIBE_DEVOPS_ADVICE: &str =
    "Leverage AI copilots for rapid iteration, but ensure human review for security critical paths.";

pub const DEFAULT_SECURITY_NOTES: [&str; 3] = [
    "Use managed auth providers or battle-tested libraries.",
    "Keep all communication over HTTPS.",
    "Rotate secrets and never commit them to version control.",
];

pub const AI_TOOLING_CHECKLIST: [&str; 2] = [
    "Configure AI tools (Cursor, Windsurf, GitHub Copilot) with project-specific context rules.",
    "Establish a 'human-in-the-loop' review process for AI-generated code.",
];

/// Stateless builder over a borrowed knowledge base. Cheap to create and
/// safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine<'kb> {
    kb: &'kb KnowledgeBase,
}

impl Default for RecommendationEngine<'static> {
    fn default() -> Self {
        Self::new(KnowledgeBase::builtin())
    }
}

impl<'kb> RecommendationEngine<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn knowledge_base(&self) -> &'kb KnowledgeBase {
        self.kb
    }

    /// Build a recommendation. Total over any input: unknown keys degrade to
    /// the documented fallbacks instead of failing.
    pub fn build(&self, input: &ProjectInput) -> RecommendationRecord {
        let profile = self.kb.resolve_profile(&input.project_type);

        let title = format!(
            "{} \u{2013} {} / {}",
            profile.label,
            input.complexity.to_uppercase(),
            input.performance.replace('-', " ").to_uppercase()
        );

        let skill = self.kb.skill_adjustment(&input.team_skill);
        let budget = self.kb.budget_adjustment(&input.budget);
        let security = self.kb.security_adjustment(&input.data_sensitivity);

        let architecture_summary = self.architecture_summary(
            skill.architecture.unwrap_or(profile.architecture),
            input,
        );

        let ai = AiAssistance::from_key(&input.ai_assistance);

        let mut devops_guidance = if skill.devops.is_empty() {
            to_strings(&DEFAULT_DEVOPS_GUIDANCE)
        } else {
            skill.devops
        };
        match ai {
            Some(AiAssistance::Agents) => devops_guidance.push(AGENTS_DEVOPS_ADVICE.to_string()),
            Some(AiAssistance::Vibe) => devops_guidance.push(VIBE_DEVOPS_ADVICE.to_string()),
            Some(AiAssistance::None) | None => {}
        }

        let deployment = ordered_union(profile.deployment, budget.deployment);

        let security_notes = if security.security.is_empty() {
            to_strings(&DEFAULT_SECURITY_NOTES)
        } else {
            security.security
        };

        let mut checklist: Vec<String> = self
            .kb
            .checklist_base()
            .iter()
            .chain(self.kb.checklist_for(&input.project_type))
            .cloned()
            .collect();
        // Anything other than an explicit "none" counts as AI-assisted here.
        if ai != Some(AiAssistance::None) {
            checklist.extend(to_strings(&AI_TOOLING_CHECKLIST));
        }

        let metrics = Metrics {
            complexity_score: score_complexity(&input.complexity),
            cost_score: score_cost(&input.budget),
            risk_score: score_risk(&input.data_sensitivity, &input.traffic),
        };

        let context = input
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        debug!(
            project_type = %input.project_type,
            profile = %profile.label,
            complexity_score = metrics.complexity_score,
            cost_score = metrics.cost_score,
            risk_score = metrics.risk_score,
            "Built recommendation"
        );

        RecommendationRecord {
            title,
            profile_label: profile.label,
            project_type: input.project_type.clone(),
            complexity: input.complexity.clone(),
            performance: input.performance.clone(),
            budget: input.budget.clone(),
            team_skill: input.team_skill.clone(),
            data_sensitivity: input.data_sensitivity.clone(),
            traffic: input.traffic.clone(),
            timeline: input.timeline.clone(),
            goal: input.goal.clone(),
            ai_assistance: input.ai_assistance.clone(),
            description: input.description.clone(),
            context,
            frontend: profile.frontend,
            backend: profile.backend,
            database: profile.database,
            deployment,
            architecture_summary,
            devops_guidance,
            security_notes,
            checklist,
            metrics,
            pros: profile.pros,
            cons: profile.cons,
            budget_notes: budget.notes,
            pitfalls: self.kb.pitfalls().to_vec(),
        }
    }

    /// Appends the conditional guidance in fixed order. Each fragment is
    /// independent; several may apply.
    fn architecture_summary(&self, base: String, input: &ProjectInput) -> String {
        let kind = ProjectType::from_key(&input.project_type);
        let goal = Goal::resolve(&input.goal);

        let mut fragments = Vec::new();
        if kind == Some(ProjectType::Scalable) && goal == Goal::LongTerm {
            fragments.push(SCALABLE_LONG_TERM_GUIDANCE);
        }
        if kind == Some(ProjectType::Personal) && goal == Goal::ShipFast {
            fragments.push(PERSONAL_SHIP_FAST_GUIDANCE);
        }
        if AiAssistance::from_key(&input.ai_assistance) == Some(AiAssistance::Agents) {
            fragments.push(AGENTIC_ARCHITECTURE_GUIDANCE);
        }

        fragments.into_iter().fold(base, |mut summary, fragment| {
            summary.push(' ');
            summary.push_str(fragment);
            summary
        })
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Set union that keeps the first occurrence of each entry in encounter
/// order.
fn ordered_union(first: Vec<String>, second: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    first
        .into_iter()
        .chain(second)
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}
