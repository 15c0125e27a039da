use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of record a create intent targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Ticket,
    Article,
    Profile,
    Opportunity,
    Resource,
    Task,
    Meeting,
    Project,
}

impl EntityKind {
    pub const ALL: [EntityKind; 8] = [
        EntityKind::Ticket,
        EntityKind::Article,
        EntityKind::Profile,
        EntityKind::Opportunity,
        EntityKind::Resource,
        EntityKind::Task,
        EntityKind::Meeting,
        EntityKind::Project,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ticket => "ticket",
            Self::Article => "article",
            Self::Profile => "profile",
            Self::Opportunity => "opportunity",
            Self::Resource => "resource",
            Self::Task => "task",
            Self::Meeting => "meeting",
            Self::Project => "project",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionPattern {
    pub kind: EntityKind,
    pub verbs: &'static [&'static str],
    pub nouns: &'static [&'static str],
    pub icon: &'static str,
    pub shortcut: &'static str,
}

impl ActionPattern {
    pub fn is_verb(&self, word: &str) -> bool {
        self.verbs.contains(&word)
    }

    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains(&word)
    }
}

/// Recognised create intents. Order is priority: the first pattern whose
/// verbs and nouns both occur in a query wins.
pub fn action_patterns() -> &'static [ActionPattern] {
    &[
        ActionPattern {
            kind: EntityKind::Ticket,
            verbs: &[
                "create", "new", "add", "open", "start", "make", "raise", "submit", "file",
            ],
            nouns: &["ticket", "issue", "bug", "problem", "request", "support"],
            icon: "ticket",
            shortcut: "⌘+T",
        },
        ActionPattern {
            kind: EntityKind::Article,
            verbs: &["create", "new", "add", "write", "publish", "draft", "compose"],
            nouns: &["article", "doc", "document", "guide", "tutorial", "post"],
            icon: "doc.text",
            shortcut: "⌘+N",
        },
        ActionPattern {
            kind: EntityKind::Profile,
            verbs: &["create", "new", "add", "setup", "configure", "make"],
            nouns: &["profile", "account", "user", "contact", "person"],
            icon: "person.circle",
            shortcut: "⌘+P",
        },
        ActionPattern {
            kind: EntityKind::Opportunity,
            verbs: &["create", "new", "add", "start", "track", "register"],
            nouns: &["opportunity", "deal", "lead", "sale", "prospect"],
            icon: "chart.line.uptrend.xyaxis",
            shortcut: "⌘+O",
        },
        ActionPattern {
            kind: EntityKind::Resource,
            verbs: &["create", "new", "add", "upload", "share", "store"],
            nouns: &["resource", "file", "asset", "document", "attachment"],
            icon: "folder",
            shortcut: "⌘+R",
        },
        ActionPattern {
            kind: EntityKind::Task,
            verbs: &["create", "new", "add", "assign", "schedule"],
            nouns: &["task", "todo", "assignment", "work", "activity"],
            icon: "checklist",
            shortcut: "⌘+K",
        },
        ActionPattern {
            kind: EntityKind::Meeting,
            verbs: &["create", "new", "schedule", "setup", "arrange", "book"],
            nouns: &["meeting", "call", "appointment", "session", "discussion"],
            icon: "video",
            shortcut: "⌘+M",
        },
        ActionPattern {
            kind: EntityKind::Project,
            verbs: &["create", "new", "start", "initialize", "begin"],
            nouns: &["project", "initiative", "program", "campaign"],
            icon: "folder.badge.gearshape",
            shortcut: "⌘+J",
        },
    ]
}

/// Trigger words for the "create new X about '...'" suggestion offered when
/// no explicit intent was found. Checked in order, substring match.
pub fn contextual_suggestions() -> &'static [(EntityKind, &'static [&'static str])] {
    &[
        (EntityKind::Ticket, &["issue", "problem"]),
        (EntityKind::Article, &["guide", "help"]),
        (EntityKind::Resource, &["file", "document"]),
        (EntityKind::Opportunity, &["lead", "sale"]),
    ]
}
