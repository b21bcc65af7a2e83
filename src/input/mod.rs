//! Input Module
//!
//! The raw project questionnaire and its completeness check. Every collector
//! (CLI file, interactive prompt, JSON body, HTML form) funnels into
//! [`ProjectInput`] and must call [`ProjectInput::validate`] before the
//! engine runs.

pub mod vocabulary;

pub use vocabulary::{
    AiAssistance, Budget, Complexity, DataSensitivity, Goal, Performance, ProjectType, TeamSkill,
    Traffic, UnknownValue,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by input collectors before the engine is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl InputError {
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            InputError::MissingFields(fields) => fields,
        }
    }
}

/// One questionnaire submission, exactly as supplied.
///
/// Fields stay as strings so the recommendation can echo them verbatim.
/// Missing keys deserialize to empty strings and are caught by `validate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectInput {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProjectInput {
    /// Wire names of the required fields, in questionnaire order.
    pub const REQUIRED_FIELDS: [&'static str; 10] = [
        "projectType",
        "complexity",
        "performance",
        "timeline",
        "budget",
        "teamSkill",
        "dataSensitivity",
        "traffic",
        "goal",
        "aiAssistance",
    ];

    fn required_value(&self, field: &str) -> &str {
        match field {
            "projectType" => &self.project_type,
            "complexity" => &self.complexity,
            "performance" => &self.performance,
            "timeline" => &self.timeline,
            "budget" => &self.budget,
            "teamSkill" => &self.team_skill,
            "dataSensitivity" => &self.data_sensitivity,
            "traffic" => &self.traffic,
            "goal" => &self.goal,
            "aiAssistance" => &self.ai_assistance,
            _ => "",
        }
    }

    /// Rejects the submission unless every required field is non-blank.
    /// Reports every missing field at once.
    pub fn validate(&self) -> Result<(), InputError> {
        let missing: Vec<&'static str> = Self::REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| self.required_value(field).trim().is_empty())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(InputError::MissingFields(missing))
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    /// A blank description becomes `None`.
    pub fn normalized(&self) -> Self {
        Self {
            project_type: self.project_type.trim().to_string(),
            complexity: self.complexity.trim().to_string(),
            performance: self.performance.trim().to_string(),
            budget: self.budget.trim().to_string(),
            team_skill: self.team_skill.trim().to_string(),
            data_sensitivity: self.data_sensitivity.trim().to_string(),
            traffic: self.traffic.trim().to_string(),
            timeline: self.timeline.trim().to_string(),
            goal: self.goal.trim().to_string(),
            ai_assistance: self.ai_assistance.trim().to_string(),
            description: self
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        }
    }
}
