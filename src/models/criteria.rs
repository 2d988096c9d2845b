/// Upper bound of the min-length threshold (inclusive)
pub const MIN_LENGTH_MAX: usize = 12;

/// The current filter criteria: search query, length threshold,
/// and the "only selected" switch
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring to match against each tag
    pub query: String,

    /// Minimum tag length; tags shorter than this are hidden
    pub min_length: usize,

    /// When set, only tags in the selection set are shown
    pub only_selected: bool,
}

impl FilterCriteria {
    /// Create criteria with everything inert (empty query, zero
    /// threshold, switch off)
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the search query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Append one character to the query (live search editing)
    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
    }

    /// Drop the last character of the query
    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }

    /// Set the min-length threshold from a raw (possibly fractional)
    /// value. Clamped to [0, MIN_LENGTH_MAX], then truncated toward zero.
    pub fn set_min_length(&mut self, raw: f32) {
        self.min_length = raw.clamp(0.0, MIN_LENGTH_MAX as f32) as usize;
    }

    /// Step the threshold up by one, saturating at the upper bound
    pub fn increase_min_length(&mut self) {
        self.set_min_length(self.min_length as f32 + 1.0);
    }

    /// Step the threshold down by one, saturating at zero
    pub fn decrease_min_length(&mut self) {
        self.set_min_length(self.min_length as f32 - 1.0);
    }

    /// Overwrite the only-selected switch
    pub fn set_only_selected(&mut self, value: bool) {
        self.only_selected = value;
    }

    /// Flip the only-selected switch
    pub fn toggle_only_selected(&mut self) {
        self.set_only_selected(!self.only_selected);
    }

    /// Restore the inert state: empty query, zero threshold, switch off.
    /// Does not touch the selection set.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when no criterion can exclude any tag
    pub fn is_inert(&self) -> bool {
        self.query.is_empty() && self.min_length == 0 && !self.only_selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_inert() {
        let criteria = FilterCriteria::new();
        assert_eq!(criteria.query, "");
        assert_eq!(criteria.min_length, 0);
        assert!(!criteria.only_selected);
        assert!(criteria.is_inert());
    }

    #[test]
    fn test_set_min_length_truncates() {
        let mut criteria = FilterCriteria::new();
        criteria.set_min_length(3.9);
        assert_eq!(criteria.min_length, 3);
    }

    #[test]
    fn test_set_min_length_clamps_both_ends() {
        let mut criteria = FilterCriteria::new();
        criteria.set_min_length(-2.0);
        assert_eq!(criteria.min_length, 0);
        criteria.set_min_length(99.0);
        assert_eq!(criteria.min_length, MIN_LENGTH_MAX);
    }

    #[test]
    fn test_step_saturates() {
        let mut criteria = FilterCriteria::new();
        criteria.decrease_min_length();
        assert_eq!(criteria.min_length, 0);

        criteria.set_min_length(MIN_LENGTH_MAX as f32);
        criteria.increase_min_length();
        assert_eq!(criteria.min_length, MIN_LENGTH_MAX);
    }

    #[test]
    fn test_query_editing() {
        let mut criteria = FilterCriteria::new();
        criteria.push_query_char('K');
        criteria.push_query_char('o');
        assert_eq!(criteria.query, "Ko");
        criteria.pop_query_char();
        assert_eq!(criteria.query, "K");
        criteria.set_query("compose");
        assert_eq!(criteria.query, "compose");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut criteria = FilterCriteria::new();
        criteria.set_query("Ko");
        criteria.set_min_length(3.0);
        criteria.set_only_selected(true);

        criteria.reset();
        assert!(criteria.is_inert());
    }
}
