//! Knowledge Base
//!
//! Read-only tables the engine draws from: base profiles per project type,
//! the three adjustment tables, checklists and pitfalls.
//!
//! Every profile or adjustment handed out is an owned copy. The engine edits
//! what it receives (architecture override, deployment union) and those edits
//! must never reach the shared table.

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::input::{Budget, DataSensitivity, ProjectType, TeamSkill};

/// The profile every unknown project type falls back to.
pub const FALLBACK_PROJECT_TYPE: ProjectType = ProjectType::Personal;

#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("failed to read knowledge base '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML knowledge base: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON knowledge base: {0}")]
    Json(#[from] serde_json::Error),
    #[error("knowledge base has no '{}' profile to fall back on", FALLBACK_PROJECT_TYPE)]
    MissingFallbackProfile,
}

/// Starting point for one project type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseProfile {
    pub label: String,
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub database: Vec<String>,
    pub deployment: Vec<String>,
    pub architecture: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// Budget-driven additions. Empty means "no override".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetAdjustment {
    pub deployment: Vec<String>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillAdjustment {
    /// Replaces the profile's architecture text outright when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    pub devops: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityAdjustment {
    pub security: Vec<String>,
}

/// The three orthogonal adjustment tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Adjustments {
    pub budget: BTreeMap<Budget, BudgetAdjustment>,
    pub team_skill: BTreeMap<TeamSkill, SkillAdjustment>,
    pub data_sensitivity: BTreeMap<DataSensitivity, SecurityAdjustment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBase {
    pub(crate) profiles: BTreeMap<ProjectType, BaseProfile>,
    #[serde(default)]
    pub(crate) adjustments: Adjustments,
    #[serde(default)]
    pub(crate) checklist_base: Vec<String>,
    #[serde(default)]
    pub(crate) checklist_by_type: BTreeMap<ProjectType, Vec<String>>,
    #[serde(default)]
    pub(crate) pitfalls: Vec<String>,
}

lazy_static::lazy_static! {
    /// Built-in tables, initialised once and never mutated.
    static ref BUILTIN: KnowledgeBase = builtin::knowledge_base();
}

impl KnowledgeBase {
    /// Process-wide built-in knowledge base.
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    /// Load a replacement knowledge base. `.yaml`/`.yml` files are parsed as
    /// YAML, anything else as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, KnowledgeBaseError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| KnowledgeBaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let kb = if is_yaml {
            Self::from_yaml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };

        info!(
            "Loaded knowledge base from {} ({} profiles)",
            path.display(),
            kb.profiles.len()
        );
        Ok(kb)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, KnowledgeBaseError> {
        let kb: KnowledgeBase = serde_yaml::from_str(content)?;
        kb.validated()
    }

    pub fn from_json_str(content: &str) -> Result<Self, KnowledgeBaseError> {
        let kb: KnowledgeBase = serde_json::from_str(content)?;
        kb.validated()
    }

    fn validated(self) -> Result<Self, KnowledgeBaseError> {
        if !self.profiles.contains_key(&FALLBACK_PROJECT_TYPE) {
            return Err(KnowledgeBaseError::MissingFallbackProfile);
        }
        Ok(self)
    }

    pub fn to_yaml(&self) -> Result<String, KnowledgeBaseError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json(&self) -> Result<String, KnowledgeBaseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Owned copy of the profile for `kind`, if the table has one.
    pub fn profile(&self, kind: ProjectType) -> Option<BaseProfile> {
        self.profiles.get(&kind).cloned()
    }

    /// Profile for a raw project-type key, falling back to `personal`.
    pub fn resolve_profile(&self, key: &str) -> BaseProfile {
        ProjectType::from_key(key)
            .and_then(|kind| self.profile(kind))
            .or_else(|| self.profile(FALLBACK_PROJECT_TYPE))
            .unwrap_or_default()
    }

    pub fn budget_adjustment(&self, key: &str) -> BudgetAdjustment {
        Budget::from_key(key)
            .and_then(|budget| self.adjustments.budget.get(&budget).cloned())
            .unwrap_or_default()
    }

    pub fn skill_adjustment(&self, key: &str) -> SkillAdjustment {
        TeamSkill::from_key(key)
            .and_then(|skill| self.adjustments.team_skill.get(&skill).cloned())
            .unwrap_or_default()
    }

    pub fn security_adjustment(&self, key: &str) -> SecurityAdjustment {
        DataSensitivity::from_key(key)
            .and_then(|level| self.adjustments.data_sensitivity.get(&level).cloned())
            .unwrap_or_default()
    }

    pub fn checklist_base(&self) -> &[String] {
        &self.checklist_base
    }

    /// Type-specific checklist; empty for unknown project types.
    pub fn checklist_for(&self, key: &str) -> &[String] {
        ProjectType::from_key(key)
            .and_then(|kind| self.checklist_by_type.get(&kind))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn pitfalls(&self) -> &[String] {
        &self.pitfalls
    }

    pub fn project_types(&self) -> impl Iterator<Item = ProjectType> + '_ {
        self.profiles.keys().copied()
    }
}
