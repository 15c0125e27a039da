use std::sync::Arc;

use tracing::{info, warn};

use crate::action::{Action, ActionParseError};
use crate::model::ActionHandler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Executed(Action),
    Ignored { tag: String, error: ActionParseError },
}

/// Runs the stub behind `action`. Nothing leaves the process: each kind is
/// logged and reported back as executed.
pub fn execute(action: &Action) -> DispatchOutcome {
    match action {
        Action::AiQuery(query) => info!(query = %query, "handling AI query"),
        Action::OpenArticle(title) => info!(title = %title, "opening article"),
        Action::Create { entity, title } => {
            info!(entity = entity.as_str(), title = %title, "creating {entity}")
        }
    }
    DispatchOutcome::Executed(action.clone())
}

/// Parses a raw action tag and executes it. Unknown tags are logged and
/// ignored.
pub fn dispatch_tag(tag: &str) -> DispatchOutcome {
    match tag.parse::<Action>() {
        Ok(action) => execute(&action),
        Err(error) => {
            warn!(tag, %error, "unknown action");
            DispatchOutcome::Ignored {
                tag: tag.to_string(),
                error,
            }
        }
    }
}

/// Handler that routes activated results to [`execute`].
pub fn executor_handler() -> ActionHandler {
    Arc::new(|action: &Action| {
        execute(action);
    })
}
