use serde::{Deserialize, Serialize};

/// The three bar-chart scores, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub complexity_score: u8,
    pub cost_score: u8,
    pub risk_score: u8,
}

/// Complete output of one engine run and the only thing presentation layers
/// consume.
///
/// Input fields are echoed exactly as supplied. `context` is `None` when no
/// meaningful description was given, which is distinct from any string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRecord {
    pub title: String,
    pub profile_label: String,

    pub project_type: String,
    pub complexity: String,
    pub performance: String,
    pub budget: String,
    pub team_skill: String,
    pub data_sensitivity: String,
    pub traffic: String,
    pub timeline: String,
    pub goal: String,
    pub ai_assistance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub context: Option<String>,

    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub database: Vec<String>,
    pub deployment: Vec<String>,

    pub architecture_summary: String,
    pub devops_guidance: Vec<String>,
    pub security_notes: Vec<String>,
    pub checklist: Vec<String>,
    pub metrics: Metrics,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub budget_notes: Vec<String>,
    pub pitfalls: Vec<String>,
}
