//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the
//! application's update function. Messages represent user actions, async
//! command results, and system events.

use crate::github::error::DiscoveryError;
use crate::github::models::{RepositoryDetails, SearchPage};

/// Messages for the discovery TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Search input
    /// Focus the search input.
    FocusSearch,
    /// A character typed into the focused search input.
    SearchInputChar(char),
    /// Delete the character before the input caret.
    SearchInputBackspace,
    /// Submit the search input as a fresh query.
    SubmitSearch,

    // Navigation
    /// Move cursor up one item.
    CursorUp,
    /// Move cursor down one item.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to first item.
    Home,
    /// Move cursor to last item.
    End,

    // Search data
    /// A search page arrived for the fetch dispatched with `seq`.
    SearchCompleted {
        /// Sequence number the fetch was dispatched with.
        seq: u64,
        /// The fetched page.
        page: SearchPage,
    },
    /// A search fetch failed.
    SearchFailed {
        /// Sequence number the fetch was dispatched with.
        seq: u64,
        /// Displayable error message.
        message: String,
    },
    /// Request the next page of the current query.
    LoadMore,

    // Refinement
    /// Cycle the sort key.
    CycleSort,
    /// Cycle the language filter over the observed languages.
    CycleLanguage,
    /// Reset sort and language filter to their defaults.
    ClearRefinement,

    // Comparison
    /// Toggle the repository under the cursor in the comparison selection.
    ToggleCompare,

    // Details
    /// Open the detail pane for the repository under the cursor.
    OpenDetails,
    /// Details arrived for the fetch dispatched with `seq`.
    DetailsLoaded {
        /// Sequence number the fetch was dispatched with.
        seq: u64,
        /// The fetched details.
        details: RepositoryDetails,
    },
    /// A detail fetch failed.
    DetailsFailed {
        /// Sequence number the fetch was dispatched with.
        seq: u64,
        /// Displayable error message.
        message: String,
    },

    // Application lifecycle
    /// Escape pressed; closes the topmost overlay.
    EscapePressed,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Creates a search failure message from a discovery error.
    #[must_use]
    pub fn search_failed(seq: u64, error: &DiscoveryError) -> Self {
        Self::SearchFailed {
            seq,
            message: error.to_string(),
        }
    }

    /// Creates a detail failure message from a discovery error.
    #[must_use]
    pub fn details_failed(seq: u64, error: &DiscoveryError) -> Self {
        Self::DetailsFailed {
            seq,
            message: error.to_string(),
        }
    }

    /// Returns true for search input editing messages.
    #[must_use]
    pub const fn is_search_input(&self) -> bool {
        matches!(
            self,
            Self::FocusSearch
                | Self::SearchInputChar(_)
                | Self::SearchInputBackspace
                | Self::SubmitSearch
        )
    }

    /// Returns true for cursor navigation messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
        )
    }

    /// Returns true for search data messages.
    #[must_use]
    pub const fn is_search_data(&self) -> bool {
        matches!(
            self,
            Self::SearchCompleted { .. } | Self::SearchFailed { .. } | Self::LoadMore
        )
    }

    /// Returns true for refinement control messages.
    #[must_use]
    pub const fn is_refinement(&self) -> bool {
        matches!(
            self,
            Self::CycleSort | Self::CycleLanguage | Self::ClearRefinement
        )
    }

    /// Returns true for detail pane messages.
    #[must_use]
    pub const fn is_details(&self) -> bool {
        matches!(
            self,
            Self::OpenDetails | Self::DetailsLoaded { .. } | Self::DetailsFailed { .. }
        )
    }
}
