use maple_core::knowledge_base::{KnowledgeBase, KnowledgeBaseError};

#[test]
fn loads_toml_catalog_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kb.toml");
    std::fs::write(
        &path,
        r#"
[[items]]
title = "Expense policy"
category = "Finance"
icon = "banknote"
tags = ["expenses", "policy"]

[[items]]
title = "Travel booking"
category = "Finance"
icon = "airplane"
"#,
    )
    .unwrap();

    let kb = KnowledgeBase::load(&path).unwrap();
    assert_eq!(kb.len(), 2);
    assert_eq!(kb.items()[0].title, "Expense policy");
    assert!(kb.items()[1].tags.is_empty());
}

#[test]
fn loads_json_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kb.json");
    std::fs::write(
        &path,
        r#"{"items": [{"title": "VPN setup", "category": "IT", "icon": "network", "tags": ["vpn"]}]}"#,
    )
    .unwrap();

    let kb = KnowledgeBase::load(&path).unwrap();
    assert_eq!(kb.items()[0].icon, "network");
}

#[test]
fn empty_catalog_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kb.json5");
    std::fs::write(&path, "{ items: [] }").unwrap();

    assert!(matches!(
        KnowledgeBase::load(&path),
        Err(KnowledgeBaseError::Empty)
    ));
}

#[test]
fn malformed_catalog_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kb.toml");
    std::fs::write(&path, "[[items]]\ntitle = 3\n").unwrap();

    assert!(matches!(
        KnowledgeBase::load(&path),
        Err(KnowledgeBaseError::Parse { .. })
    ));
}
