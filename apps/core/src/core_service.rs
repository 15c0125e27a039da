use thiserror::Error;

use crate::action_executor::{dispatch_tag, DispatchOutcome};
use crate::action_patterns::{action_patterns, ActionPattern};
use crate::config::{validate, Config, ConfigError};
use crate::knowledge_base::{KnowledgeBase, KnowledgeBaseError};
use crate::model::{ActionHandler, ResultItem};
use crate::search::SearchLimits;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("knowledge base error: {0}")]
    KnowledgeBase(#[from] KnowledgeBaseError),
}

/// Owns the catalog, the intent table and the tuning knobs for one process.
/// Construct it once at startup and share it by reference.
#[derive(Debug, Clone)]
pub struct CoreService {
    config: Config,
    knowledge: KnowledgeBase,
    patterns: &'static [ActionPattern],
}

impl CoreService {
    /// Validates `config` and loads the knowledge base it points at, falling
    /// back to the built-in catalog.
    pub fn new(config: Config) -> Result<Self, ServiceError> {
        validate(&config)?;
        let knowledge = match &config.knowledge_base_path {
            Some(path) => KnowledgeBase::load(path)?,
            None => KnowledgeBase::builtin(),
        };
        let source = config
            .knowledge_base_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "builtin".to_string());
        tracing::info!(items = knowledge.len(), source = %source, "knowledge base ready");
        Ok(Self {
            config,
            knowledge,
            patterns: action_patterns(),
        })
    }

    pub fn with_knowledge_base(
        config: Config,
        knowledge: KnowledgeBase,
    ) -> Result<Self, ServiceError> {
        validate(&config)?;
        Ok(Self {
            config,
            knowledge,
            patterns: action_patterns(),
        })
    }

    pub fn search(&self, query: &str, on_action: ActionHandler) -> Vec<ResultItem> {
        crate::search::search(
            &self.knowledge,
            self.patterns,
            &self.search_limits(),
            query,
            on_action,
        )
    }

    pub fn dispatch(&self, tag: &str) -> DispatchOutcome {
        dispatch_tag(tag)
    }

    pub fn search_limits(&self) -> SearchLimits {
        self.config.search_limits()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn patterns(&self) -> &'static [ActionPattern] {
        self.patterns
    }
}
