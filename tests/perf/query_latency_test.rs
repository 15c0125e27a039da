use std::sync::Arc;
use std::time::Instant;

use crate::action::Action;
use crate::action_patterns::action_patterns;
use crate::knowledge_base::KnowledgeBase;
use crate::model::{ActionHandler, KnowledgeItem};
use crate::search::{search, SearchLimits};

fn p95_ms(samples: &mut [f64]) -> f64 {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let last = samples.len().saturating_sub(1);
    let idx = ((last as f64) * 0.95).round() as usize;
    samples[idx.min(last)]
}

#[test]
fn warm_query_p95_under_15ms() {
    let mut items: Vec<KnowledgeItem> = (0..1_000)
        .map(|i| {
            KnowledgeItem::new(
                &format!("Runbook {i:05}"),
                "Operations",
                "doc",
                &["runbook", "operations", "oncall"],
            )
        })
        .collect();
    items.push(KnowledgeItem::new(
        "Deployment best practices",
        "DevOps",
        "server.rack",
        &["deployment", "devops", "best practices", "ci/cd"],
    ));
    let knowledge = KnowledgeBase::from_items(items).unwrap();
    let limits = SearchLimits::default();
    let handler: ActionHandler = Arc::new(|_: &Action| {});

    for _ in 0..10 {
        let _ = search(
            &knowledge,
            action_patterns(),
            &limits,
            "deployment best practices",
            Arc::clone(&handler),
        );
    }

    let mut batch_p95 = Vec::with_capacity(5);
    for _ in 0..5 {
        let mut samples = Vec::with_capacity(40);
        for _ in 0..40 {
            let start = Instant::now();
            let _ = search(
                &knowledge,
                action_patterns(),
                &limits,
                "deployment best practices",
                Arc::clone(&handler),
            );
            samples.push(start.elapsed().as_secs_f64() * 1000.0);
        }
        batch_p95.push(p95_ms(&mut samples));
    }

    batch_p95.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median_p95 = batch_p95[batch_p95.len() / 2];

    assert!(
        median_p95 <= 15.0,
        "median batch p95 too high: {median_p95:.3}ms (budget 15.0ms); batches={batch_p95:?}",
    );
}
