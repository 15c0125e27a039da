use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::core_service::CoreService;
use crate::debounce::QueryDebouncer;
use crate::model::{ActionHandler, ResultItem};
use crate::selection::SelectionModel;

pub struct SearchSession {
    service: Arc<CoreService>,
    on_action: ActionHandler,
    debouncer: QueryDebouncer,
    selection: SelectionModel,
    query: String,
}

impl SearchSession {
    pub fn new(service: Arc<CoreService>, on_action: ActionHandler) -> Self {
        let debouncer = QueryDebouncer::new(service.config().debounce_window());
        let selection = SelectionModel::new(service.config().max_visible_results);
        Self {
            service,
            on_action,
            debouncer,
            selection,
            query: String::new(),
        }
    }

    pub fn input(&mut self, query: &str, now: Instant) {
        self.query = query.to_string();
        self.debouncer.submit(query, now);
    }

    /// Runs the pending search once its quiet window has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(ticket) = self.debouncer.poll(now) else {
            return false;
        };
        let results = self
            .service
            .search(&ticket.query, Arc::clone(&self.on_action));
        self.apply_results(ticket.generation, results)
    }

    /// Installs results computed for `generation`. Results for a query that
    /// has since been superseded are dropped.
    pub fn apply_results(&mut self, generation: u64, results: Vec<ResultItem>) -> bool {
        if !self.debouncer.is_current(generation) {
            tracing::debug!(
                generation,
                latest = self.debouncer.generation(),
                "dropping stale results"
            );
            return false;
        }
        self.selection.replace_results(results);
        true
    }

    pub fn flush(&mut self, now: Instant) -> bool {
        let window = self.service.config().debounce_window();
        self.tick(now + window)
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    pub fn move_up(&mut self) {
        self.selection.move_up();
    }

    pub fn move_down(&mut self) {
        self.selection.move_down();
    }

    pub fn activate(&self) -> bool {
        self.selection.activate()
    }

    pub fn visible_results(&self) -> &[ResultItem] {
        self.selection.results()
    }

    pub fn selected(&self) -> Option<&ResultItem> {
        self.selection.selected()
    }

    pub fn selected_index(&self) -> usize {
        self.selection.selected_index()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn service(&self) -> &CoreService {
        &self.service
    }
}
