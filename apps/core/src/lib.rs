pub mod action;
pub mod action_executor;
pub mod action_patterns;
pub mod config;
pub mod contract;
pub mod core_service;
pub mod debounce;
pub mod intent;
pub mod knowledge_base;
pub mod logging;
pub mod model;
pub mod relevance;
pub mod runtime;
pub mod search;
pub mod selection;
pub mod session;

#[cfg(test)]
mod tests {
    mod query_latency_test {
        include!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../tests/perf/query_latency_test.rs"
        ));
    }
}
