//! Presentation-only derivations over a finished record.

use crate::engine::RecommendationRecord;
use crate::input::{Goal, Performance};

pub const SECTION_STACK: [&str; 4] = ["Frontend", "Backend", "Database & Storage", "Deployment"];

/// One labelled percentage bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBar {
    pub label: &'static str,
    pub percent: u8,
}

impl RecommendationRecord {
    /// "moderate" -> "Moderate".
    pub fn complexity_label(&self) -> String {
        let mut chars = self.complexity.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn performance_label(&self) -> &str {
        match Performance::from_key(&self.performance) {
            Some(Performance::NotCritical) => "Low",
            Some(Performance::Important) => "Medium",
            Some(Performance::Critical) => "High",
            None => &self.performance,
        }
    }

    pub fn goal_focus(&self) -> &'static str {
        match Goal::resolve(&self.goal) {
            Goal::ShipFast => "Optimize for speed",
            Goal::LongTerm => "Optimize for robustness",
            Goal::Balanced => "Balanced",
        }
    }

    pub fn technology_sections(&self) -> [(&'static str, &[String]); 4] {
        [
            (SECTION_STACK[0], self.frontend.as_slice()),
            (SECTION_STACK[1], self.backend.as_slice()),
            (SECTION_STACK[2], self.database.as_slice()),
            (SECTION_STACK[3], self.deployment.as_slice()),
        ]
    }

    pub fn score_bars(&self) -> [ScoreBar; 3] {
        [
            ScoreBar {
                label: "Implementation Complexity",
                percent: self.metrics.complexity_score,
            },
            ScoreBar {
                label: "Infra Cost Level",
                percent: self.metrics.cost_score,
            },
            ScoreBar {
                label: "Risk & Security Sensitivity",
                percent: self.metrics.risk_score,
            },
        ]
    }

    /// Fixed four-step rollout for the first 60–90 days.
    pub fn rollout_plan(&self) -> [String; 4] {
        let host = self
            .deployment
            .first()
            .map(String::as_str)
            .unwrap_or("a managed host");
        [
            format!(
                "Start with a single production environment using {host} and a managed Postgres instance."
            ),
            "Wire up CI/CD so that merges to main trigger deploys.".to_string(),
            "Add a staging environment once your release cadence stabilizes.".to_string(),
            "Introduce background workers and queues only when there is a clear need (slow tasks, heavy jobs)."
                .to_string(),
        ]
    }

    /// Fixed five-step learning path keyed off the first option of each list.
    pub fn learning_order(&self) -> [String; 5] {
        let first = |items: &[String], fallback: &'static str| -> String {
            items.first().cloned().unwrap_or_else(|| fallback.to_string())
        };
        [
            format!(
                "Frontend: Focus on one framework ({}). Learn routing, state, and API calls.",
                first(&self.frontend, "your chosen frontend framework")
            ),
            format!(
                "Backend: Learn your chosen backend ({}), including API design and auth basics.",
                first(&self.backend, "your chosen backend")
            ),
            format!(
                "Database: Understand modeling in {} and basic migrations.",
                first(&self.database, "your chosen database")
            ),
            "Deployment: Deploy a minimal vertical slice (one user journey end-to-end).".to_string(),
            "Quality: Add tests (unit + a few integration), logging, and basic monitoring.".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::build_recommendation;
    use crate::input::ProjectInput;

    fn record(performance: &str, goal: &str) -> crate::engine::RecommendationRecord {
        build_recommendation(&ProjectInput {
            project_type: "small-team".to_string(),
            complexity: "complex".to_string(),
            performance: performance.to_string(),
            budget: "minimal".to_string(),
            team_skill: "solo-junior".to_string(),
            data_sensitivity: "low".to_string(),
            traffic: "low".to_string(),
            timeline: "2 weeks".to_string(),
            goal: goal.to_string(),
            ai_assistance: "none".to_string(),
            description: None,
        })
    }

    #[test]
    fn test_labels() {
        let rec = record("not-critical", "ship-fast");
        assert_eq!(rec.complexity_label(), "Complex");
        assert_eq!(rec.performance_label(), "Low");
        assert_eq!(rec.goal_focus(), "Optimize for speed");

        let rec = record("blazing", "whatever");
        assert_eq!(rec.performance_label(), "blazing");
        assert_eq!(rec.goal_focus(), "Balanced");
    }

    #[test]
    fn test_rollout_names_first_host() {
        let rec = record("important", "long-term");
        assert!(rec.rollout_plan()[0].contains("using Render and"));
    }

    #[test]
    fn test_rollout_without_hosts() {
        let mut rec = record("important", "long-term");
        rec.deployment.clear();
        assert!(rec.rollout_plan()[0].contains("using a managed host and"));
    }

    #[test]
    fn test_learning_order_uses_first_options() {
        let rec = record("important", "long-term");
        let steps = rec.learning_order();
        assert!(steps[0].contains("(React + component library (MUI/Chakra))"));
        assert!(steps[1].contains("(Node.js + Express / NestJS)"));
        assert!(steps[2].contains("modeling in PostgreSQL"));
    }
}
