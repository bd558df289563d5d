//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for
//! repository discovery. It coordinates the result set, refinement,
//! comparison selection, and detail pane, and handles async data loading.
//!
//! # Module Structure
//!
//! - `fetch`: Async fetch commands and data message handlers
//! - `navigation`: Cursor movement handlers
//! - `rendering`: View rendering methods for terminal output

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use crate::github::models::RepositorySummary;
use crate::location::SearchLocation;
use crate::search::compare::CompareSelection;
use crate::search::refine::Refinement;
use crate::search::results::ResultSet;

use super::components::{CompareTableComponent, RepoDetailComponent, RepoListComponent};
use super::input::map_key_to_message;
use super::messages::AppMsg;
use super::state::detail::DetailSequence;
use super::state::{DetailState, ScrollSentinel};

mod fetch;
mod navigation;
mod rendering;

/// Main application model for the discovery TUI.
#[derive(Debug)]
pub struct DiscoveryApp {
    /// Text currently in the search input.
    pub(crate) query_input: String,
    /// Whether keystrokes edit the search input.
    pub(crate) search_focused: bool,
    /// The query of the most recently submitted search, empty before the
    /// first search.
    pub(crate) searched_query: String,
    /// Loaded results and fetch state.
    pub(crate) results: ResultSet,
    /// Active sort and language selection.
    pub(crate) refinement: Refinement,
    /// Cached indices of the repositories visible under the current
    /// refinement. Invalidated when results or refinement change.
    visible_indices: Vec<usize>,
    /// Comparison selection.
    pub(crate) compare: CompareSelection,
    /// Detail pane state.
    pub(crate) detail: DetailState,
    /// Supersession tracking for detail fetches.
    detail_seq: DetailSequence,
    /// Load-more trigger.
    sentinel: ScrollSentinel,
    /// Current cursor position (0-indexed) within the visible list.
    pub(crate) cursor_position: usize,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Repository list component.
    repo_list: RepoListComponent,
    /// Detail pane component.
    detail_component: RepoDetailComponent,
    /// Comparison table component.
    compare_table: CompareTableComponent,
}

impl Default for DiscoveryApp {
    fn default() -> Self {
        Self::empty()
    }
}

impl DiscoveryApp {
    /// Creates an empty application with no query.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            query_input: String::new(),
            search_focused: false,
            searched_query: String::new(),
            results: ResultSet::new(),
            refinement: Refinement::default(),
            visible_indices: Vec::new(),
            compare: CompareSelection::new(),
            detail: DetailState::Hidden,
            detail_seq: DetailSequence::default(),
            sentinel: ScrollSentinel::new(),
            cursor_position: 0,
            width: 80,
            height: 24,
            show_help: false,
            repo_list: RepoListComponent::new(),
            detail_component: RepoDetailComponent::new(),
            compare_table: CompareTableComponent::new(),
        }
    }

    /// Creates an application restored from a mirrored location.
    ///
    /// A non-empty query is submitted immediately; the returned command,
    /// when present, performs that initial fetch.
    #[must_use]
    pub fn from_location(location: SearchLocation) -> (Self, Option<Cmd>) {
        let mut app = Self::empty();
        app.refinement.sort = location.sort;
        app.refinement.language = location.language;
        if location.query.is_empty() {
            return (app, None);
        }
        app.query_input = location.query;
        let cmd = app.handle_submit_search();
        (app, cmd)
    }

    /// Returns the currently visible repositories in display order.
    #[must_use]
    pub fn visible_repos(&self) -> Vec<&RepositorySummary> {
        self.visible_indices
            .iter()
            .filter_map(|&index| self.results.repos().get(index))
            .collect()
    }

    /// Returns the count of visible repositories.
    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.visible_indices.len()
    }

    /// Returns a reference to the repository under the cursor, if any.
    #[must_use]
    pub fn selected_repo(&self) -> Option<&RepositorySummary> {
        self.visible_indices
            .get(self.cursor_position)
            .and_then(|&index| self.results.repos().get(index))
    }

    /// Returns true while incremental loading is possible: a search has
    /// been submitted, refinement is inactive, and the remote service
    /// reports more matches than are loaded.
    #[must_use]
    pub fn has_more(&self) -> bool {
        !self.searched_query.is_empty() && !self.refinement.is_active() && self.results.has_more()
    }

    /// Returns the current addressable location of the view.
    #[must_use]
    pub fn location(&self) -> SearchLocation {
        SearchLocation {
            query: self.searched_query.clone(),
            sort: self.refinement.sort,
            language: self.refinement.language.clone(),
        }
    }

    /// Rebuilds the visible index cache from the current refinement.
    ///
    /// Call this after modifying the results or changing the refinement.
    pub(crate) fn rebuild_visible_indices(&mut self) {
        self.visible_indices = self.refinement.visible_indices(self.results.repos());
    }

    /// Clamps the cursor position to the visible range.
    pub(crate) fn clamp_cursor(&mut self) {
        if self.visible_indices.is_empty() {
            self.cursor_position = 0;
        } else if self.cursor_position >= self.visible_indices.len() {
            self.cursor_position = self.visible_indices.len().saturating_sub(1);
        }
    }

    /// Mirrors the current location through the installed sink.
    fn sync_location(&self) {
        super::sync_location(&self.location());
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all
    /// application messages and returns any resulting commands. It
    /// delegates to specialised handlers for each message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_search_input() {
            return self.handle_search_input_msg(msg);
        }
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_search_data() {
            return self.handle_search_data_msg(msg);
        }
        if msg.is_refinement() {
            return self.handle_refinement_msg(msg);
        }
        if msg.is_details() {
            return self.handle_details_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches search input messages to their handlers.
    fn handle_search_input_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::FocusSearch => {
                self.search_focused = true;
                None
            }
            AppMsg::SearchInputChar(ch) => {
                self.query_input.push(*ch);
                None
            }
            AppMsg::SearchInputBackspace => {
                self.query_input.pop();
                None
            }
            AppMsg::SubmitSearch => self.handle_submit_search(),
            _ => None,
        }
    }

    /// Submits the search input as a fresh query.
    ///
    /// An empty input resets the view to idle. In both cases the comparison
    /// selection is cleared and the location mirror updated.
    fn handle_submit_search(&mut self) -> Option<Cmd> {
        self.search_focused = false;
        self.compare.clear();
        self.cursor_position = 0;

        let trimmed = self.query_input.trim().to_owned();
        if trimmed.is_empty() {
            self.searched_query.clear();
            self.results.reset();
            self.rebuild_visible_indices();
            self.sync_location();
            return None;
        }

        self.searched_query.clone_from(&trimmed);
        let ticket = self.results.begin_search();
        self.rebuild_visible_indices();
        self.sync_location();
        Some(Self::search_cmd(trimmed, ticket))
    }

    /// Dispatches refinement messages to their handlers.
    fn handle_refinement_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CycleSort => {
                self.refinement.sort = self.refinement.sort.cycled();
                self.after_refinement_change()
            }
            AppMsg::CycleLanguage => {
                let languages = Refinement::available_languages(self.results.repos());
                self.refinement.language = self.refinement.language.cycled(&languages);
                self.after_refinement_change()
            }
            AppMsg::ClearRefinement => {
                self.refinement.clear();
                self.after_refinement_change()
            }
            _ => None,
        }
    }

    /// Re-derives the visible list after a refinement change.
    ///
    /// Leaving refinement mode re-enables incremental loading over the list
    /// as currently loaded, so the sentinel is polled here; it never issues
    /// a new search.
    fn after_refinement_change(&mut self) -> Option<Cmd> {
        self.rebuild_visible_indices();
        self.clamp_cursor();
        self.sync_location();
        self.maybe_load_more()
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::EscapePressed => {
                self.handle_escape();
                None
            }
            AppMsg::ToggleCompare => {
                self.handle_toggle_compare();
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.handle_resize(*width, *height);
                None
            }
            _ => None,
        }
    }

    /// Closes the topmost overlay: detail pane first, then search focus,
    /// then the help overlay.
    fn handle_escape(&mut self) {
        if self.detail.is_open() {
            self.close_details();
        } else if self.search_focused {
            self.search_focused = false;
        } else if self.show_help {
            self.show_help = false;
        }
    }

    /// Toggles the repository under the cursor in the comparison selection.
    fn handle_toggle_compare(&mut self) {
        if let Some(repo) = self.selected_repo().cloned() {
            self.compare.toggle(&repo);
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let list_height = height.saturating_sub(rendering::CHROME_HEIGHT) as usize;
        self.repo_list.set_visible_height(list_height.max(1));
    }
}

impl Model for DiscoveryApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve the startup location from module-level storage.
        let location = super::initial_location();
        Self::from_location(location)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if let Some(mapped) = map_key_to_message(key_msg, self.search_focused) {
                return self.handle_message(&mapped);
            }
            return None;
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        self.render()
    }
}
