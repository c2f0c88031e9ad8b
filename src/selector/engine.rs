use crate::selector::record::RecordView;
use crate::selector::selection::SelectionSet;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

const DEFAULT_VIEWPORT_ROWS: usize = 10;

/// How browsing ended. Commit with an empty selection and cancellation
/// both produce no assignments, but the caller must tell them apart:
/// only a commit proceeds to the follow-up prompts and submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseOutcome {
    Committed,
    Cancelled,
}

/// Scrollable multi-select over a fixed record list. Filtering is a
/// view operation only: it narrows what is browsable, never what is
/// selected. The record list is not refreshed mid-session.
pub struct Selector {
    records: Vec<RecordView>,
    selection: SelectionSet,
    filter: String,
    cursor: usize,
    scroll: usize,
    viewport_rows: usize,
}

impl Selector {
    pub fn new(records: Vec<RecordView>) -> Self {
        Self {
            records,
            selection: SelectionSet::new(),
            filter: String::new(),
            cursor: 0,
            scroll: 0,
            viewport_rows: DEFAULT_VIEWPORT_ROWS,
        }
    }

    pub fn with_viewport_rows(mut self, rows: usize) -> Self {
        self.viewport_rows = rows.max(1);
        self
    }

    pub fn records(&self) -> &[RecordView] {
        &self.records
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// Indices into `records` that match the current filter, in list
    /// order. Matching is a case-insensitive substring test on titles.
    pub fn visible(&self) -> Vec<usize> {
        if self.filter.is_empty() {
            return (0..self.records.len()).collect();
        }

        let needle = self.filter.to_lowercase();
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.title.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }

    /// Moves the highlight, clamped at the list boundaries.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
            self.scroll = 0;
            return;
        }

        let max = len - 1;
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, max as isize) as usize;
        self.keep_cursor_visible();
    }

    /// Flips selection of the highlighted record.
    pub fn toggle_current(&mut self) {
        let visible = self.visible();
        let Some(&record_index) = visible.get(self.cursor) else {
            return;
        };
        let id = self.records[record_index].id.clone();
        let now_selected = self.selection.toggle(&id);
        debug!(%id, now_selected, "selection toggled");
    }

    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter = query.into();
        self.clamp_after_filter_change();
    }

    /// Routes one key event; `Some(outcome)` ends browsing.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<BrowseOutcome> {
        if key.is_cancel() {
            return Some(self.cancel());
        }

        // Shift is part of ordinary typing; other chords are ignored.
        if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT)
        {
            return None;
        }

        match key.code {
            KeyCode::Enter => return Some(self.commit()),
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-(self.viewport_rows as isize)),
            KeyCode::PageDown => self.move_cursor(self.viewport_rows as isize),
            KeyCode::Char(' ') => self.toggle_current(),
            KeyCode::Char(ch) => {
                self.filter.push(ch);
                self.clamp_after_filter_change();
            }
            KeyCode::Backspace => {
                self.filter.pop();
                self.clamp_after_filter_change();
            }
            _ => {}
        }
        None
    }

    pub fn commit(&mut self) -> BrowseOutcome {
        debug!(selected = self.selection.len(), "selection committed");
        BrowseOutcome::Committed
    }

    pub fn cancel(&mut self) -> BrowseOutcome {
        debug!("selection cancelled");
        BrowseOutcome::Cancelled
    }

    /// Selected records in toggle order, filter ignored: membership of
    /// filtered-out records is preserved.
    pub fn selected_records(&self) -> Vec<RecordView> {
        self.selection
            .ids()
            .filter_map(|id| self.records.iter().find(|r| r.id == id))
            .cloned()
            .collect()
    }

    pub fn into_selection(self) -> SelectionSet {
        self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    fn clamp_after_filter_change(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
        self.keep_cursor_visible();
    }

    fn keep_cursor_visible(&mut self) {
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + self.viewport_rows {
            self.scroll = self.cursor + 1 - self.viewport_rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<RecordView> {
        vec![
            RecordView::new("A", "Login works", "Code: TC-1 | Kind: general"),
            RecordView::new("B", "Bulk import", "Code: TC-2 | Kind: adhoc"),
            RecordView::new("C", "Logout clears session", "Code: TC-3 | Kind: security"),
        ]
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::plain(code)
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut selector = Selector::new(records());
        selector.move_cursor(-1);
        assert_eq!(selector.cursor(), 0);
        selector.move_cursor(10);
        assert_eq!(selector.cursor(), 2);
    }

    #[test]
    fn toggle_through_keys_flips_membership() {
        let mut selector = Selector::new(records());
        selector.handle_key(key(KeyCode::Char(' ')));
        assert!(selector.selection().contains("A"));
        selector.handle_key(key(KeyCode::Char(' ')));
        assert!(!selector.selection().contains("A"));
    }

    #[test]
    fn filter_narrows_view_but_preserves_selection() {
        let mut selector = Selector::new(records());
        selector.toggle_current();
        selector.move_cursor(2);
        selector.toggle_current();
        assert!(selector.selection().contains("A"));
        assert!(selector.selection().contains("C"));

        selector.set_filter("bulk");
        assert_eq!(selector.visible(), vec![1]);

        let outcome = selector.handle_key(key(KeyCode::Enter));
        assert_eq!(outcome, Some(BrowseOutcome::Committed));

        let selected: Vec<String> = selector
            .selected_records()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(selected, vec!["A", "C"]);
    }

    #[test]
    fn filter_matching_is_case_insensitive() {
        let mut selector = Selector::new(records());
        selector.set_filter("LOGIN");
        assert_eq!(selector.visible(), vec![0]);
    }

    #[test]
    fn cancel_is_distinct_from_empty_commit() {
        let mut selector = Selector::new(records());
        assert_eq!(
            selector.handle_key(KeyEvent::plain(KeyCode::Esc)),
            Some(BrowseOutcome::Cancelled)
        );

        let mut other = Selector::new(records());
        assert_eq!(
            other.handle_key(key(KeyCode::Enter)),
            Some(BrowseOutcome::Committed)
        );
        assert!(other.selection().is_empty());
    }

    #[test]
    fn scroll_follows_the_cursor() {
        let many: Vec<RecordView> = (0..20)
            .map(|i| RecordView::new(format!("R{i}"), format!("Record {i}"), ""))
            .collect();
        let mut selector = Selector::new(many).with_viewport_rows(5);

        selector.move_cursor(7);
        assert_eq!(selector.cursor(), 7);
        assert_eq!(selector.scroll(), 3);

        selector.move_cursor(-7);
        assert_eq!(selector.scroll(), 0);
    }
}
