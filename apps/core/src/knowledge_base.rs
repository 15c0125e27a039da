use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::model::KnowledgeItem;

#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("failed to read knowledge base {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse knowledge base {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("knowledge base is empty")]
    Empty,
    #[error("knowledge item #{0} has an empty title")]
    InvalidItem(usize),
}

#[derive(Debug, Deserialize)]
struct KnowledgeFile {
    items: Vec<KnowledgeItem>,
}

/// Ordered, read-only catalog. Catalog order breaks relevance ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    items: Vec<KnowledgeItem>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KnowledgeBase {
    pub fn from_items(items: Vec<KnowledgeItem>) -> Result<Self, KnowledgeBaseError> {
        if items.is_empty() {
            return Err(KnowledgeBaseError::Empty);
        }
        if let Some(index) = items.iter().position(|item| item.title.trim().is_empty()) {
            return Err(KnowledgeBaseError::InvalidItem(index));
        }
        Ok(Self { items })
    }

    /// Loads a catalog from a `.toml`, `.json` or `.json5` file holding an
    /// `items` array.
    pub fn load(path: &Path) -> Result<Self, KnowledgeBaseError> {
        let raw = std::fs::read_to_string(path).map_err(|source| KnowledgeBaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parse_error = |message: String| KnowledgeBaseError::Parse {
            path: path.to_path_buf(),
            message,
        };

        let file: KnowledgeFile = match extension_of(path).as_str() {
            "toml" => toml::from_str(&raw).map_err(|e| parse_error(e.to_string()))?,
            _ => json5::from_str(&raw).map_err(|e| parse_error(e.to_string()))?,
        };
        Self::from_items(file.items)
    }

    pub fn items(&self) -> &[KnowledgeItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn builtin() -> Self {
        Self {
            items: builtin_items(),
        }
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

fn builtin_items() -> Vec<KnowledgeItem> {
    vec![
        KnowledgeItem::new(
            "How to set up SSO",
            "Authentication & Security",
            "lock",
            &["sso", "authentication", "security", "setup", "configuration"],
        ),
        KnowledgeItem::new(
            "Deployment best practices",
            "DevOps",
            "server.rack",
            &["deployment", "devops", "best practices", "ci/cd"],
        ),
        KnowledgeItem::new(
            "Employee onboarding process",
            "HR",
            "person.badge.plus",
            &["hr", "onboarding", "employees", "process"],
        ),
        // Analytics
        KnowledgeItem::new(
            "Understanding Instagram Engagement Metrics",
            "Analytics",
            "chart.bar",
            &["analytics", "engagement", "metrics", "insights", "reporting"],
        ),
        KnowledgeItem::new(
            "Audience Growth Analysis Dashboard",
            "Analytics",
            "person.3",
            &["audience", "growth", "analytics", "dashboard", "metrics"],
        ),
        KnowledgeItem::new(
            "Content Performance Tracking",
            "Analytics",
            "chart.line.uptrend.xyaxis",
            &["content", "performance", "tracking", "analytics", "posts"],
        ),
        // Campaigns
        KnowledgeItem::new(
            "Creating Multi-Channel Campaigns",
            "Campaigns",
            "bolt.horizontal",
            &["campaigns", "marketing", "strategy", "multi-channel"],
        ),
        KnowledgeItem::new(
            "Influencer Campaign Setup Guide",
            "Campaigns",
            "star",
            &["influencer", "campaign", "setup", "collaboration"],
        ),
        KnowledgeItem::new(
            "Story Analytics and Campaign Tracking",
            "Campaigns",
            "camera",
            &["stories", "analytics", "tracking", "performance"],
        ),
        // Content
        KnowledgeItem::new(
            "Content Calendar Best Practices",
            "Content",
            "calendar",
            &["content", "calendar", "planning", "scheduling"],
        ),
        KnowledgeItem::new(
            "Bulk Post Scheduling",
            "Content",
            "clock",
            &["scheduling", "posts", "bulk", "automation"],
        ),
        KnowledgeItem::new(
            "Asset Library Management",
            "Content",
            "photo.on.rectangle",
            &["assets", "library", "media", "organization"],
        ),
        // Support
        KnowledgeItem::new(
            "DM Automation Setup",
            "Support",
            "message",
            &["dm", "automation", "messages", "support"],
        ),
        KnowledgeItem::new(
            "Comment Management Workflow",
            "Support",
            "bubble.left.and.bubble.right",
            &["comments", "management", "moderation", "workflow"],
        ),
        KnowledgeItem::new(
            "Support Team Response Templates",
            "Support",
            "text.bubble",
            &["templates", "support", "responses", "customer service"],
        ),
        // Reporting
        KnowledgeItem::new(
            "Creating Custom Report Templates",
            "Reporting",
            "exclamationmark.bubble",
            &["reports", "templates", "custom", "analytics"],
        ),
        KnowledgeItem::new(
            "Automated Weekly Performance Reports",
            "Reporting",
            "chart.bar.doc.horizontal",
            &["automation", "reports", "weekly", "performance"],
        ),
        KnowledgeItem::new(
            "Competitor Analysis Reports",
            "Reporting",
            "arrow.triangle.branch",
            &["competitor", "analysis", "reports", "benchmarking"],
        ),
        // Integrations
        KnowledgeItem::new(
            "Instagram API Integration Guide",
            "Integrations",
            "link",
            &["api", "integration", "setup", "instagram"],
        ),
        KnowledgeItem::new(
            "Webhook Configuration",
            "Integrations",
            "arrow.triangle.branch",
            &["webhooks", "integration", "configuration", "automation"],
        ),
        KnowledgeItem::new(
            "Third-Party Tools Connection",
            "Integrations",
            "square.grid.3x3.square",
            &["integration", "tools", "connection", "third-party"],
        ),
        // Automation
        KnowledgeItem::new(
            "Setting Up Auto-Response Rules",
            "Automation",
            "gearshape.2",
            &["automation", "responses", "rules", "setup"],
        ),
        KnowledgeItem::new(
            "Engagement Automation Workflows",
            "Automation",
            "arrow.triangle.turn.up.right.diamond",
            &["automation", "engagement", "workflow", "responses"],
        ),
        KnowledgeItem::new(
            "Comment Filtering and Auto-Moderation",
            "Automation",
            "text.bubble.fill",
            &["comments", "moderation", "automation", "filtering"],
        ),
    ]
}
