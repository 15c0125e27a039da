use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::action::Action;

pub const ICON_AI: &str = "sparkle";
pub const ICON_CREATE: &str = "plus.circle";

pub const SHORTCUT_CONFIRM: &str = "⏎";
pub const SHORTCUT_NEW_ITEM: &str = "⌘+N";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeItem {
    pub title: String,
    pub category: String,
    pub icon: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl KnowledgeItem {
    pub fn new(title: &str, category: &str, icon: &str, tags: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            category: category.to_string(),
            icon: icon.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }
}

/// Receives the action of an activated result.
pub type ActionHandler = Arc<dyn Fn(&Action) + Send + Sync>;

/// One row of a result list. Built fresh for every search; two items are
/// equal only when they share an `id`.
#[derive(Clone)]
pub struct ResultItem {
    pub id: Uuid,
    pub icon: String,
    pub title: String,
    pub shortcut: Option<String>,
    pub action: Action,
    handler: ActionHandler,
}

impl ResultItem {
    pub fn new(
        icon: &str,
        title: String,
        shortcut: Option<&str>,
        action: Action,
        handler: ActionHandler,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            icon: icon.to_string(),
            title,
            shortcut: shortcut.map(str::to_string),
            action,
            handler,
        }
    }

    pub fn activate(&self) {
        (self.handler)(&self.action);
    }
}

impl PartialEq for ResultItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ResultItem {}

impl fmt::Debug for ResultItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultItem")
            .field("id", &self.id)
            .field("icon", &self.icon)
            .field("title", &self.title)
            .field("shortcut", &self.shortcut)
            .field("action", &self.action)
            .finish()
    }
}
