/// Application mode/state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Main browser view: chip grid, selected-tags card, filter controls
    #[default]
    Browse,

    /// Live search input: keystrokes edit the query directly
    Search,

    /// Help overlay
    Help,

    /// Confirmation dialog before resetting filters and selection
    ConfirmReset,
}

/// Which chip panel currently has the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    /// The filtered "All Tags" chip grid
    #[default]
    AllTags,

    /// The "Selected Tags" card
    Selected,
}

impl Panel {
    /// Get the other panel (for Tab navigation)
    pub fn next(&self) -> Panel {
        match self {
            Panel::AllTags => Panel::Selected,
            Panel::Selected => Panel::AllTags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_next_cycles() {
        assert_eq!(Panel::AllTags.next(), Panel::Selected);
        assert_eq!(Panel::Selected.next(), Panel::AllTags);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(AppMode::default(), AppMode::Browse);
        assert_eq!(Panel::default(), Panel::AllTags);
    }
}
