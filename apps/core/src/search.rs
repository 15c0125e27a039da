use std::sync::Arc;

use crate::action::Action;
use crate::action_patterns::{contextual_suggestions, ActionPattern, EntityKind};
use crate::intent::detect;
use crate::knowledge_base::KnowledgeBase;
use crate::model::{
    ActionHandler, KnowledgeItem, ResultItem, ICON_AI, ICON_CREATE, SHORTCUT_CONFIRM,
    SHORTCUT_NEW_ITEM,
};
use crate::relevance::{score_with_terms, search_terms, Relevance};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchLimits {
    /// Knowledge items must score strictly above this.
    pub relevance_threshold: f64,
    pub max_knowledge_results: usize,
    /// The contextual create suggestion needs a query longer than this.
    pub fallback_min_query_chars: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            relevance_threshold: 0.3,
            max_knowledge_results: 5,
            fallback_min_query_chars: 2,
        }
    }
}

/// Builds the result list for `query`: the detected create intent (or an
/// "Ask AI" row), the best knowledge matches, then an optional contextual
/// create suggestion. Activating a row hands its [`Action`] to `on_action`.
pub fn search(
    knowledge: &KnowledgeBase,
    patterns: &[ActionPattern],
    limits: &SearchLimits,
    query: &str,
    on_action: ActionHandler,
) -> Vec<ResultItem> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();
    let intent = detect(patterns, query);

    match &intent {
        Some(intent) => {
            let entity = intent.pattern.kind;
            let title = if intent.title.is_empty() {
                format!("Create new {entity}")
            } else {
                format!("Create {entity}: {}", intent.title)
            };
            results.push(ResultItem::new(
                intent.pattern.icon,
                title,
                Some(intent.pattern.shortcut),
                Action::Create {
                    entity,
                    title: intent.title.clone(),
                },
                Arc::clone(&on_action),
            ));
        }
        None => results.push(ResultItem::new(
            ICON_AI,
            format!("Ask AI about '{query}'"),
            Some(SHORTCUT_CONFIRM),
            Action::AiQuery(query.to_string()),
            Arc::clone(&on_action),
        )),
    }

    for item in rank_knowledge(
        knowledge.items(),
        query,
        limits.relevance_threshold,
        limits.max_knowledge_results,
    ) {
        results.push(ResultItem::new(
            &item.icon,
            item.title.clone(),
            Some(SHORTCUT_CONFIRM),
            Action::OpenArticle(item.title.clone()),
            Arc::clone(&on_action),
        ));
    }

    if intent.is_none() && query.chars().count() > limits.fallback_min_query_chars {
        if let Some(entity) = contextual_suggestion(query) {
            results.push(ResultItem::new(
                ICON_CREATE,
                format!("Create new {entity} about '{query}'"),
                Some(SHORTCUT_NEW_ITEM),
                Action::Create {
                    entity,
                    title: query.to_string(),
                },
                on_action,
            ));
        }
    }

    tracing::debug!(
        query,
        intent = intent.as_ref().map(|i| i.pattern.kind.as_str()),
        results = results.len(),
        "search completed"
    );
    results
}

/// Items scoring above `threshold`, best first, catalog order on ties.
pub fn rank_knowledge<'a>(
    items: &'a [KnowledgeItem],
    query: &str,
    threshold: f64,
    limit: usize,
) -> Vec<&'a KnowledgeItem> {
    if limit == 0 || items.is_empty() {
        return Vec::new();
    }

    let terms = search_terms(query);
    let mut scored: Vec<(Relevance, usize, &KnowledgeItem)> = items
        .iter()
        .enumerate()
        .map(|(index, item)| (score_with_terms(query, &terms, item), index, item))
        .filter(|(relevance, _, _)| relevance.exceeds(threshold))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, _, item)| item)
        .collect()
}

fn contextual_suggestion(query: &str) -> Option<EntityKind> {
    let lowered = query.to_lowercase();
    contextual_suggestions()
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|word| lowered.contains(word)))
        .map(|(entity, _)| *entity)
}
