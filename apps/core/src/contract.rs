use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::model::ResultItem;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultItemDto {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub shortcut: Option<String>,
    pub action: Action,
    pub action_tag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResponse {
    pub query: String,
    pub selected_index: usize,
    pub results: Vec<ResultItemDto>,
}

impl SearchResponse {
    pub fn new(query: &str, selected_index: usize, results: &[ResultItem]) -> Self {
        Self {
            query: query.to_string(),
            selected_index,
            results: results.iter().map(ResultItemDto::from).collect(),
        }
    }
}

impl From<&ResultItem> for ResultItemDto {
    fn from(value: &ResultItem) -> Self {
        Self {
            id: value.id.to_string(),
            icon: value.icon.clone(),
            title: value.title.clone(),
            shortcut: value.shortcut.clone(),
            action: value.action.clone(),
            action_tag: value.action.to_string(),
        }
    }
}
