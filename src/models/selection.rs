use std::collections::HashSet;

/// The set of tags the user has activated. Membership is by value;
/// ordering concerns belong to the caller (the UI displays selected
/// tags in source-list order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    tags: HashSet<String>,
}

impl SelectionSet {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given tag is currently selected
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Flip the tag's membership: remove it if present, add it otherwise.
    /// Returns true if the tag is selected after the call.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.tags.remove(tag) {
            false
        } else {
            self.tags.insert(tag.to_string());
            true
        }
    }

    /// Remove the tag if present; absent tags are silently ignored
    pub fn remove(&mut self, tag: &str) {
        self.tags.remove(tag);
    }

    /// Drop every selected tag
    pub fn clear(&mut self) {
        self.tags.clear();
    }

    /// Number of selected tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True when nothing is selected
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = SelectionSet::new();

        assert!(selection.toggle("Kotlin"));
        assert!(selection.contains("Kotlin"));
        assert_eq!(selection.len(), 1);

        assert!(!selection.toggle("Kotlin"));
        assert!(!selection.contains("Kotlin"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_prior_state() {
        let mut selection = SelectionSet::new();
        selection.toggle("UI");
        let before = selection.clone();

        selection.toggle("State");
        selection.toggle("State");
        assert_eq!(selection, before);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut selection = SelectionSet::new();
        selection.toggle("UI");

        selection.remove("Compose");
        assert_eq!(selection.len(), 1);

        selection.remove("UI");
        assert!(selection.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut selection = SelectionSet::new();
        selection.toggle("UI");
        selection.toggle("UX");
        selection.toggle("State");

        selection.clear();
        assert!(selection.is_empty());
        assert!(!selection.contains("UI"));
    }
}
