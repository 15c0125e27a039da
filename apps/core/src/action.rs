use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::action_patterns::EntityKind;

const AI_QUERY_PREFIX: &str = "ai_query";
const OPEN_ARTICLE_PREFIX: &str = "open_article";
const CREATE_PREFIX: &str = "create_";

/// Follow-up requested by an activated result.
///
/// `Display` renders the action tag understood by host dispatchers
/// (`ai_query: ...`, `open_article: ...`, `create_<kind>: ...`) and
/// `FromStr` parses it back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum Action {
    AiQuery(String),
    OpenArticle(String),
    Create { entity: EntityKind, title: String },
}

impl Action {
    pub fn payload(&self) -> &str {
        match self {
            Self::AiQuery(query) => query,
            Self::OpenArticle(title) => title,
            Self::Create { title, .. } => title,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AiQuery(query) => write!(f, "{AI_QUERY_PREFIX}: {query}"),
            Self::OpenArticle(title) => write!(f, "{OPEN_ARTICLE_PREFIX}: {title}"),
            Self::Create { entity, title } => write!(f, "{CREATE_PREFIX}{entity}: {title}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionParseError {
    #[error("action tag has no ':' separator: {0}")]
    MissingSeparator(String),
    #[error("unknown action prefix: {0}")]
    UnknownPrefix(String),
    #[error("unknown create target: {0}")]
    UnknownEntity(String),
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let (prefix, rest) = tag
            .split_once(':')
            .ok_or_else(|| ActionParseError::MissingSeparator(tag.to_string()))?;
        let payload = rest.strip_prefix(' ').unwrap_or(rest).to_string();

        if prefix == AI_QUERY_PREFIX {
            return Ok(Self::AiQuery(payload));
        }
        if prefix == OPEN_ARTICLE_PREFIX {
            return Ok(Self::OpenArticle(payload));
        }
        if let Some(target) = prefix.strip_prefix(CREATE_PREFIX) {
            let entity = target
                .parse::<EntityKind>()
                .map_err(|_| ActionParseError::UnknownEntity(target.to_string()))?;
            return Ok(Self::Create {
                entity,
                title: payload,
            });
        }

        Err(ActionParseError::UnknownPrefix(prefix.to_string()))
    }
}
