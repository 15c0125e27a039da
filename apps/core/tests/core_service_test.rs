use std::sync::Arc;

use maple_core::action::Action;
use maple_core::action_executor::DispatchOutcome;
use maple_core::action_patterns::EntityKind;
use maple_core::config::Config;
use maple_core::core_service::{CoreService, ServiceError};
use maple_core::knowledge_base::{KnowledgeBase, KnowledgeBaseError};
use maple_core::model::KnowledgeItem;

fn noop() -> maple_core::model::ActionHandler {
    Arc::new(|_: &Action| {})
}

#[test]
fn service_uses_builtin_catalog_by_default() {
    let service = CoreService::new(Config::default()).unwrap();
    assert_eq!(service.knowledge_base().len(), 24);
    assert_eq!(service.patterns().len(), 8);
}

#[test]
fn service_loads_catalog_from_config_path() {
    let dir = tempfile::tempdir().unwrap();
    let kb_path = dir.path().join("kb.toml");
    std::fs::write(
        &kb_path,
        r#"
[[items]]
title = "Rotating API keys"
category = "Security"
icon = "key"
tags = ["api", "keys", "rotation"]
"#,
    )
    .unwrap();

    let config = Config {
        knowledge_base_path: Some(kb_path),
        ..Default::default()
    };
    let service = CoreService::new(config).unwrap();

    let results = service.search("api keys", noop());
    assert_eq!(results[1].title, "Rotating API keys");
    assert_eq!(results[1].icon, "key");
}

#[test]
fn service_reports_missing_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        knowledge_base_path: Some(dir.path().join("missing.json")),
        ..Default::default()
    };

    match CoreService::new(config) {
        Err(ServiceError::KnowledgeBase(KnowledgeBaseError::Io { .. })) => {}
        other => panic!("unexpected result: {:?}", other.map(|_| ())),
    }
}

#[test]
fn service_rejects_invalid_config() {
    let config = Config {
        max_visible_results: 0,
        ..Default::default()
    };
    let result = CoreService::with_knowledge_base(config, KnowledgeBase::builtin());
    assert!(matches!(result, Err(ServiceError::Config(_))));
}

#[test]
fn service_applies_configured_limits() {
    let items = (0..8)
        .map(|i| KnowledgeItem::new(&format!("Runbook {i}"), "Ops", "doc", &[]))
        .collect();
    let config = Config {
        max_knowledge_results: 2,
        ..Default::default()
    };
    let service =
        CoreService::with_knowledge_base(config, KnowledgeBase::from_items(items).unwrap())
            .unwrap();

    let results = service.search("runbook", noop());
    assert_eq!(results.len(), 3);
}

#[test]
fn service_dispatches_tags() {
    let service = CoreService::new(Config::default()).unwrap();

    assert_eq!(
        service.dispatch("create_opportunity: Acme Renewal"),
        DispatchOutcome::Executed(Action::Create {
            entity: EntityKind::Opportunity,
            title: "Acme Renewal".into(),
        })
    );
    assert!(matches!(
        service.dispatch("share_screen: now"),
        DispatchOutcome::Ignored { .. }
    ));
}
