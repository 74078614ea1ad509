// Selectable list state.
// Tracks loading progress and keyboard selection for one tab's records.

use ratatui::widgets::ListState;

/// Loading state for async data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, LoadingState::Idle)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// State for a selectable list with keyboard navigation.
#[derive(Debug, Clone)]
pub struct SelectableList<T> {
    pub data: LoadingState<Vec<T>>,
    pub list_state: ListState,
    /// Request URL of the fetch currently in flight, if any.
    pub pending: Option<String>,
}

impl<T> Default for SelectableList<T> {
    fn default() -> Self {
        Self {
            data: LoadingState::Idle,
            list_state: ListState::default(),
            pending: None,
        }
    }
}

impl<T> SelectableList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently selected index.
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Get the currently selected item.
    pub fn selected_item(&self) -> Option<&T> {
        let items = self.data.data()?;
        items.get(self.selected()?)
    }

    /// Select the next item in the list.
    pub fn select_next(&mut self) {
        if let Some(items) = self.data.data() {
            if items.is_empty() {
                return;
            }
            let i = match self.list_state.selected() {
                Some(i) if i + 1 >= items.len() => i, // Stay at end
                Some(i) => i + 1,
                None => 0,
            };
            self.list_state.select(Some(i));
        }
    }

    /// Select the previous item in the list.
    pub fn select_prev(&mut self) {
        if let Some(items) = self.data.data() {
            if items.is_empty() {
                return;
            }
            let i = match self.list_state.selected() {
                Some(i) => i.saturating_sub(1),
                None => 0,
            };
            self.list_state.select(Some(i));
        }
    }

    /// Mark a fetch for `url` as in flight.
    pub fn start_loading(&mut self, url: String) {
        self.data = LoadingState::Loading;
        self.pending = Some(url);
    }

    /// Accept a fetch result if it answers the request in flight.
    ///
    /// Returns false when the result is for an older request and was dropped.
    pub fn finish_loading(&mut self, url: &str, result: Result<Vec<T>, String>) -> bool {
        if self.pending.as_deref() != Some(url) {
            return false;
        }
        self.pending = None;

        match result {
            Ok(items) => {
                let selection = if items.is_empty() { None } else { Some(0) };
                self.data = LoadingState::Loaded(items);
                self.list_state.select(selection);
            }
            Err(e) => {
                self.data = LoadingState::Error(e);
                self.list_state.select(None);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(items: Vec<u32>) -> SelectableList<u32> {
        let mut list = SelectableList::new();
        list.start_loading("u".to_string());
        assert!(list.finish_loading("u", Ok(items)));
        list
    }

    #[test]
    fn test_selection_bounds() {
        let mut list = loaded(vec![10, 20, 30]);
        assert_eq!(list.selected(), Some(0));

        list.select_prev();
        assert_eq!(list.selected(), Some(0));

        list.select_next();
        list.select_next();
        list.select_next();
        assert_eq!(list.selected(), Some(2));
        assert_eq!(list.selected_item(), Some(&30));
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let mut list = loaded(Vec::new());
        list.select_next();
        assert_eq!(list.selected(), None);
        assert!(list.selected_item().is_none());
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut list: SelectableList<u32> = SelectableList::new();
        list.start_loading("old".to_string());
        list.start_loading("new".to_string());

        assert!(!list.finish_loading("old", Ok(vec![1])));
        assert!(list.data.is_loading());

        assert!(list.finish_loading("new", Err("HTTP 500".to_string())));
        assert!(matches!(list.data, LoadingState::Error(ref e) if e == "HTTP 500"));
    }
}
