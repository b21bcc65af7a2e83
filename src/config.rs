//! Runtime configuration: defaults, then `.env`/environment, then CLI flags.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

use crate::knowledge::{KnowledgeBase, KnowledgeBaseError};

pub const ENV_ADDR: &str = "STACK_ADVISOR_ADDR";
pub const ENV_KB_PATH: &str = "STACK_ADVISOR_KB_PATH";
pub const ENV_LOG: &str = "RUST_LOG";

/// Configuration for the advisor binaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Socket address the HTTP service binds to
    pub bind_addr: String,
    /// Replacement knowledge base (YAML or JSON); built-in tables when unset
    pub knowledge_base_path: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            knowledge_base_path: None,
            log_filter: "stack_advisor=info,tower_http=info".to_string(),
        }
    }
}

impl AdvisorConfig {
    /// Defaults overlaid with `.env` and process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(addr) = non_blank(ENV_ADDR) {
            config.bind_addr = addr;
        }
        if let Some(path) = non_blank(ENV_KB_PATH) {
            config.knowledge_base_path = Some(PathBuf::from(path));
        }
        if let Some(filter) = non_blank(ENV_LOG) {
            config.log_filter = filter;
        }
        config
    }

    pub fn with_bind_addr(mut self, addr: Option<String>) -> Self {
        if let Some(addr) = addr {
            self.bind_addr = addr;
        }
        self
    }

    pub fn with_knowledge_base_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.knowledge_base_path = path;
        }
        self
    }

    /// The configured knowledge base, or a copy of the built-in one.
    pub fn load_knowledge_base(&self) -> Result<KnowledgeBase, KnowledgeBaseError> {
        match &self.knowledge_base_path {
            Some(path) => KnowledgeBase::from_path(path),
            None => {
                info!("Using built-in knowledge base");
                Ok(KnowledgeBase::builtin().clone())
            }
        }
    }
}
