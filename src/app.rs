use crate::filter::filter_tags;
use crate::models::{AppMode, FilterCriteria, Panel, SelectionSet};

/// Main application state
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Immutable source tag list supplied at startup
    pub source_tags: Vec<String>,

    /// Current filter criteria (query, min length, only-selected)
    pub criteria: FilterCriteria,

    /// Currently selected tags
    pub selection: SelectionSet,

    /// Which chip panel has the cursor
    pub focused_panel: Panel,

    /// Cursor index into the visible (filtered) tag list
    pub cursor: usize,

    /// Cursor index into the selected-tags card
    pub selected_cursor: usize,

    /// Should the application quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application instance over the given source tags
    pub fn new(source_tags: Vec<String>) -> Self {
        App {
            mode: AppMode::default(),
            source_tags,
            criteria: FilterCriteria::new(),
            selection: SelectionSet::new(),
            focused_panel: Panel::default(),
            cursor: 0,
            selected_cursor: 0,
            should_quit: false,
            status_message: None,
        }
    }

    /// Recompute the visible tags from the current criteria and selection
    pub fn visible_tags(&self) -> Vec<&str> {
        filter_tags(&self.source_tags, &self.criteria, &self.selection)
    }

    /// Selected tags in source-list order (for the selected-tags card)
    pub fn selected_tags(&self) -> Vec<&str> {
        self.source_tags
            .iter()
            .map(String::as_str)
            .filter(|tag| self.selection.contains(tag))
            .collect()
    }

    /// The tag under the cursor in the focused panel, if any
    pub fn tag_under_cursor(&self) -> Option<String> {
        match self.focused_panel {
            Panel::AllTags => self.visible_tags().get(self.cursor).map(|t| t.to_string()),
            Panel::Selected => self
                .selected_tags()
                .get(self.selected_cursor)
                .map(|t| t.to_string()),
        }
    }

    // ==================== Selection operations ====================

    /// Toggle the tag under the cursor (All Tags panel)
    pub fn toggle_under_cursor(&mut self) {
        if let Some(tag) = self.tag_under_cursor() {
            let now_selected = self.selection.toggle(&tag);
            self.set_status(if now_selected {
                format!("Selected '{}'", tag)
            } else {
                format!("Deselected '{}'", tag)
            });
            self.clamp_cursors();
        }
    }

    /// Remove the tag under the cursor (Selected panel)
    pub fn remove_under_cursor(&mut self) {
        if let Some(tag) = self.tag_under_cursor() {
            self.selection.remove(&tag);
            self.set_status(format!("Removed '{}'", tag));
            self.clamp_cursors();
        }
    }

    /// Clear the entire selection
    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            self.set_status("Nothing selected");
            return;
        }
        self.selection.clear();
        self.set_status("Selection cleared");
        self.clamp_cursors();
    }

    // ==================== Criteria operations ====================

    /// Append a character to the search query (Search mode)
    pub fn push_query_char(&mut self, c: char) {
        self.criteria.push_query_char(c);
        self.clamp_cursors();
    }

    /// Drop the last character of the search query (Search mode)
    pub fn pop_query_char(&mut self) {
        self.criteria.pop_query_char();
        self.clamp_cursors();
    }

    /// Step the min-length threshold up by one
    pub fn increase_min_length(&mut self) {
        self.criteria.increase_min_length();
        self.clamp_cursors();
    }

    /// Step the min-length threshold down by one
    pub fn decrease_min_length(&mut self) {
        self.criteria.decrease_min_length();
        self.clamp_cursors();
    }

    /// Flip the only-selected switch
    pub fn toggle_only_selected(&mut self) {
        self.criteria.toggle_only_selected();
        self.set_status(if self.criteria.only_selected {
            "Showing only selected tags"
        } else {
            "Showing all tags"
        });
        self.clamp_cursors();
    }

    /// Reset the filter criteria; the selection is untouched
    pub fn clear_filters(&mut self) {
        self.criteria.reset();
        self.set_status("Filters cleared");
        self.clamp_cursors();
    }

    /// Reset filters and selection together
    pub fn reset_all(&mut self) {
        self.criteria.reset();
        self.selection.clear();
        self.focused_panel = Panel::AllTags;
        self.cursor = 0;
        self.selected_cursor = 0;
        self.mode = AppMode::Browse;
        self.set_status("Everything reset");
    }

    // ==================== Navigation ====================

    /// Switch focus to the other chip panel
    pub fn focus_next_panel(&mut self) {
        self.focused_panel = self.focused_panel.next();
        self.clamp_cursors();
    }

    /// Move the cursor forward within the focused panel
    pub fn select_next(&mut self) {
        let count = self.focused_count();
        match self.focused_panel {
            Panel::AllTags => {
                if count > 0 && self.cursor < count - 1 {
                    self.cursor += 1;
                }
            }
            Panel::Selected => {
                if count > 0 && self.selected_cursor < count - 1 {
                    self.selected_cursor += 1;
                }
            }
        }
    }

    /// Move the cursor backward within the focused panel
    pub fn select_previous(&mut self) {
        match self.focused_panel {
            Panel::AllTags => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            Panel::Selected => {
                if self.selected_cursor > 0 {
                    self.selected_cursor -= 1;
                }
            }
        }
    }

    /// Jump to the first chip in the focused panel
    pub fn select_first(&mut self) {
        match self.focused_panel {
            Panel::AllTags => self.cursor = 0,
            Panel::Selected => self.selected_cursor = 0,
        }
    }

    /// Jump to the last chip in the focused panel
    pub fn select_last(&mut self) {
        let count = self.focused_count();
        if count == 0 {
            return;
        }
        match self.focused_panel {
            Panel::AllTags => self.cursor = count - 1,
            Panel::Selected => self.selected_cursor = count - 1,
        }
    }

    fn focused_count(&self) -> usize {
        match self.focused_panel {
            Panel::AllTags => self.visible_tags().len(),
            Panel::Selected => self.selected_tags().len(),
        }
    }

    /// Keep both cursors inside their (possibly shrunken) lists
    fn clamp_cursors(&mut self) {
        let visible = self.visible_tags().len();
        if self.cursor >= visible {
            self.cursor = visible.saturating_sub(1);
        }
        let selected = self.selected_tags().len();
        if self.selected_cursor >= selected {
            self.selected_cursor = selected.saturating_sub(1);
        }
    }

    // ==================== Mode transitions ====================

    /// Enter live search input mode
    pub fn start_search(&mut self) {
        self.mode = AppMode::Search;
    }

    /// Leave search mode, keeping the query
    pub fn finish_search(&mut self) {
        self.mode = AppMode::Browse;
    }

    /// Leave search mode, discarding the query
    pub fn cancel_search(&mut self) {
        self.criteria.set_query("");
        self.mode = AppMode::Browse;
        self.clamp_cursors();
    }

    /// Show the reset confirmation dialog
    pub fn start_reset(&mut self) {
        self.mode = AppMode::ConfirmReset;
    }

    /// Show the help overlay
    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
    }

    /// Return to the main browser view
    pub fn return_to_browse(&mut self) {
        self.mode = AppMode::Browse;
    }

    // ==================== Messages & lifecycle ====================

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_messages(&mut self) {
        self.status_message = None;
    }

    /// Request application exit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::sample_tags;

    fn app_with(labels: &[&str]) -> App {
        App::new(labels.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_visible_tags_starts_as_full_list() {
        let app = App::new(sample_tags());
        assert_eq!(app.visible_tags().len(), 22);
    }

    #[test]
    fn test_toggle_under_cursor_selects_and_deselects() {
        let mut app = app_with(&["Kotlin", "Compose", "UI"]);
        app.cursor = 1;

        app.toggle_under_cursor();
        assert!(app.selection.contains("Compose"));

        app.toggle_under_cursor();
        assert!(!app.selection.contains("Compose"));
    }

    #[test]
    fn test_selected_tags_follow_source_order() {
        let mut app = app_with(&["Kotlin", "Compose", "UI", "State"]);
        app.selection.toggle("State");
        app.selection.toggle("Kotlin");

        assert_eq!(app.selected_tags(), vec!["Kotlin", "State"]);
    }

    #[test]
    fn test_remove_under_cursor_in_selected_panel() {
        let mut app = app_with(&["Kotlin", "Compose", "UI"]);
        app.selection.toggle("Kotlin");
        app.selection.toggle("UI");
        app.focused_panel = Panel::Selected;
        app.selected_cursor = 1;

        app.remove_under_cursor();
        assert!(!app.selection.contains("UI"));
        assert!(app.selection.contains("Kotlin"));
    }

    #[test]
    fn test_cursor_clamped_when_filter_shrinks_list() {
        let mut app = app_with(&["Kotlin", "Compose", "UI", "UX"]);
        app.cursor = 3;

        // "x" only matches "UX"; the cursor must land on the last
        // remaining chip.
        app.push_query_char('x');
        assert_eq!(app.visible_tags(), vec!["UX"]);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_clear_filters_keeps_selection() {
        let mut app = app_with(&["Kotlin", "Compose", "UI"]);
        app.selection.toggle("Kotlin");
        app.criteria.set_query("Ko");
        app.criteria.set_min_length(3.0);
        app.criteria.set_only_selected(true);

        app.clear_filters();
        assert!(app.criteria.is_inert());
        assert!(app.selection.contains("Kotlin"));
    }

    #[test]
    fn test_reset_all_restores_everything() {
        let mut app = App::new(sample_tags());
        app.selection.toggle("Kotlin");
        app.selection.toggle("UI");
        app.criteria.set_query("Ko");
        app.criteria.set_min_length(3.0);

        app.reset_all();

        assert!(app.selection.is_empty());
        assert!(app.criteria.is_inert());
        assert_eq!(app.visible_tags().len(), app.source_tags.len());
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut app = app_with(&["Kotlin", "Compose"]);

        app.select_previous();
        assert_eq!(app.cursor, 0);

        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.cursor, 1);

        app.select_first();
        assert_eq!(app.cursor, 0);
        app.select_last();
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_navigation_on_empty_visible_list() {
        let mut app = app_with(&["Kotlin"]);
        app.criteria.set_only_selected(true);
        assert!(app.visible_tags().is_empty());

        app.select_next();
        app.select_last();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_cancel_search_discards_query() {
        let mut app = app_with(&["Kotlin", "Compose"]);
        app.start_search();
        app.push_query_char('K');
        app.push_query_char('o');

        app.cancel_search();
        assert_eq!(app.criteria.query, "");
        assert_eq!(app.mode, AppMode::Browse);
    }

    #[test]
    fn test_finish_search_keeps_query() {
        let mut app = app_with(&["Kotlin", "Compose"]);
        app.start_search();
        app.push_query_char('K');

        app.finish_search();
        assert_eq!(app.criteria.query, "K");
        assert_eq!(app.mode, AppMode::Browse);
    }

    #[test]
    fn test_clear_selection_reports_when_empty() {
        let mut app = app_with(&["Kotlin"]);
        app.clear_selection();
        assert_eq!(app.status_message.as_deref(), Some("Nothing selected"));
    }
}
