//! Shell state and its pure update function
//!
//! All mutable UI state lives in one serializable struct and changes
//! only through `reduce`, so every transition is testable without a
//! toolkit and nothing hides in ambient globals or closures.

use serde::{Deserialize, Serialize};

use cloud_insights_types::RangeSelection;

/// Which page the main stack shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActiveView {
    #[default]
    Dashboard,
    Profile,
}

impl ActiveView {
    /// Stack child name for this view
    pub fn page_name(&self) -> &'static str {
        match self {
            ActiveView::Dashboard => "dashboard",
            ActiveView::Profile => "profile",
        }
    }

    /// Heading shown above the page content
    pub fn title(&self) -> &'static str {
        match self {
            ActiveView::Dashboard => "Cloud Usage Analytics",
            ActiveView::Profile => "User Profile",
        }
    }
}

/// The complete shell state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub active_view: ActiveView,
    pub dark_mode: bool,
    pub sidebar_open: bool,
    pub search_query: String,
    pub range: RangeSelection,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_view: ActiveView::Dashboard,
            dark_mode: false,
            sidebar_open: true,
            search_query: String::new(),
            range: RangeSelection::default(),
        }
    }
}

/// Every user interaction the shell reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SelectView(ActiveView),
    ToggleDarkMode,
    ToggleSidebar,
    SearchChanged(String),
    RangeSelected(RangeSelection),
}

/// Apply one event to the state, returning the next state
pub fn reduce(state: UiState, event: UiEvent) -> UiState {
    match event {
        UiEvent::SelectView(view) => UiState {
            active_view: view,
            ..state
        },
        UiEvent::ToggleDarkMode => UiState {
            dark_mode: !state.dark_mode,
            ..state
        },
        UiEvent::ToggleSidebar => UiState {
            sidebar_open: !state.sidebar_open,
            ..state
        },
        UiEvent::SearchChanged(query) => UiState {
            search_query: query,
            ..state
        },
        UiEvent::RangeSelected(range) => UiState { range, ..state },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = UiState::default();
        assert_eq!(state.active_view, ActiveView::Dashboard);
        assert!(!state.dark_mode);
        assert!(state.sidebar_open);
        assert!(state.search_query.is_empty());
        assert_eq!(state.range, RangeSelection::ThirtyDays);
    }

    #[test]
    fn test_view_transitions() {
        let state = UiState::default();
        let state = reduce(state, UiEvent::SelectView(ActiveView::Profile));
        assert_eq!(state.active_view, ActiveView::Profile);
        // Re-selecting the current view is a no-op transition
        let state = reduce(state, UiEvent::SelectView(ActiveView::Profile));
        assert_eq!(state.active_view, ActiveView::Profile);
        let state = reduce(state, UiEvent::SelectView(ActiveView::Dashboard));
        assert_eq!(state.active_view, ActiveView::Dashboard);
    }

    #[test]
    fn test_toggles() {
        let state = UiState::default();
        let state = reduce(state, UiEvent::ToggleDarkMode);
        assert!(state.dark_mode);
        let state = reduce(state, UiEvent::ToggleSidebar);
        assert!(!state.sidebar_open);
        let state = reduce(state, UiEvent::ToggleDarkMode);
        assert!(!state.dark_mode);
    }

    #[test]
    fn test_search_and_range() {
        let state = UiState::default();
        let state = reduce(state, UiEvent::SearchChanged("Jan".to_string()));
        assert_eq!(state.search_query, "Jan");
        let state = reduce(
            state,
            UiEvent::RangeSelected(RangeSelection::TwelveMonths),
        );
        assert_eq!(state.range, RangeSelection::TwelveMonths);
        // Unrelated fields survive
        assert_eq!(state.search_query, "Jan");
    }

    #[test]
    fn test_state_serde_round_trip() {
        let state = reduce(UiState::default(), UiEvent::ToggleDarkMode);
        let json = serde_json::to_string(&state).unwrap();
        let back: UiState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
