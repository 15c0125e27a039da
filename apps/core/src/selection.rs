use crate::model::ResultItem;

pub const DEFAULT_VISIBLE_RESULTS: usize = 5;

/// Keyboard selection over the visible slice of a result list.
///
/// Rows are drawn bottom-up (index 0 sits next to the input field), so the
/// up arrow moves to the next logical index and the down arrow to the
/// previous one. Both wrap.
#[derive(Debug, Clone)]
pub struct SelectionModel {
    results: Vec<ResultItem>,
    selected_index: usize,
    visible_limit: usize,
}

impl Default for SelectionModel {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBLE_RESULTS)
    }
}

impl SelectionModel {
    pub fn new(visible_limit: usize) -> Self {
        Self {
            results: Vec::new(),
            selected_index: 0,
            visible_limit: visible_limit.max(1),
        }
    }

    pub fn replace_results(&mut self, mut results: Vec<ResultItem>) {
        results.truncate(self.visible_limit);
        self.results = results;
        self.selected_index = 0;
    }

    pub fn clear(&mut self) {
        self.replace_results(Vec::new());
    }

    pub fn results(&self) -> &[ResultItem] {
        &self.results
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected(&self) -> Option<&ResultItem> {
        self.results.get(self.selected_index)
    }

    pub fn move_up(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected_index = if self.selected_index >= self.results.len() - 1 {
            0
        } else {
            self.selected_index + 1
        };
    }

    pub fn move_down(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            self.results.len() - 1
        } else {
            self.selected_index - 1
        };
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index < self.results.len() {
            self.selected_index = index;
            return true;
        }
        false
    }

    pub fn activate(&self) -> bool {
        match self.selected() {
            Some(item) => {
                item.activate();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::SelectionModel;
    use crate::action::Action;
    use crate::model::{ActionHandler, ResultItem};

    fn rows(count: usize, handler: ActionHandler) -> Vec<ResultItem> {
        (0..count)
            .map(|i| {
                ResultItem::new(
                    "doc",
                    format!("Row {i}"),
                    None,
                    Action::OpenArticle(format!("Row {i}")),
                    Arc::clone(&handler),
                )
            })
            .collect()
    }

    fn model_with(count: usize) -> SelectionModel {
        let mut model = SelectionModel::default();
        model.replace_results(rows(count, Arc::new(|_: &Action| {})));
        model
    }

    #[test]
    fn up_increments_and_wraps_to_top() {
        let mut model = model_with(3);
        model.move_up();
        assert_eq!(model.selected_index(), 1);
        model.move_up();
        assert_eq!(model.selected_index(), 2);
        model.move_up();
        assert_eq!(model.selected_index(), 0);
    }

    #[test]
    fn down_from_first_wraps_to_last() {
        let mut model = model_with(4);
        model.move_down();
        assert_eq!(model.selected_index(), 3);
        model.move_down();
        assert_eq!(model.selected_index(), 2);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for count in 1..=5 {
            let mut model = model_with(count);
            model.move_up();
            let start = model.selected_index();
            for _ in 0..count {
                model.move_up();
            }
            assert_eq!(model.selected_index(), start);
            for _ in 0..count {
                model.move_down();
            }
            assert_eq!(model.selected_index(), start);
        }
    }

    #[test]
    fn navigation_on_empty_list_is_noop() {
        let mut model = SelectionModel::default();
        model.move_up();
        model.move_down();
        assert_eq!(model.selected_index(), 0);
        assert!(!model.activate());
    }

    #[test]
    fn replacing_results_resets_selection_and_truncates() {
        let mut model = model_with(3);
        model.move_up();
        model.move_up();
        assert_eq!(model.selected_index(), 2);

        model.replace_results(rows(7, Arc::new(|_: &Action| {})));
        assert_eq!(model.selected_index(), 0);
        assert_eq!(model.results().len(), 5);
    }

    #[test]
    fn activate_runs_selected_action() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut model = SelectionModel::default();
        model.replace_results(rows(
            3,
            Arc::new(move |action: &Action| sink.lock().unwrap().push(action.to_string())),
        ));

        model.move_down();
        assert!(model.activate());
        assert!(model.select(1));
        assert!(!model.select(9));
        assert!(model.activate());

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["open_article: Row 2", "open_article: Row 1"]
        );
    }
}
