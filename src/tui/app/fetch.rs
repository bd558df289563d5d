//! Async fetch commands and data message handlers.
//!
//! Every fetch command carries the sequence number it was dispatched with;
//! the handlers here apply an outcome only while that number is still the
//! latest, which is how a retriggered search supersedes a slow in-flight
//! one. Superseded outcomes are dropped without touching state or surfacing
//! an error.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::DiscoveryApp;
use crate::github::models::{RepositoryDetails, SearchPage};
use crate::search::results::FetchTicket;
use crate::tui::messages::AppMsg;
use crate::tui::state::DetailState;

/// How close to the bottom of the visible list the cursor must be before
/// the sentinel counts as in view.
const SCROLL_LOOKAHEAD: usize = 3;

impl DiscoveryApp {
    /// Dispatches search data messages to their handlers.
    pub(super) fn handle_search_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SearchCompleted { seq, page } => self.handle_search_completed(*seq, page),
            AppMsg::SearchFailed { seq, message } => self.handle_search_failed(*seq, message),
            AppMsg::LoadMore => self.handle_load_more(),
            _ => None,
        }
    }

    /// Applies a fetched page if its dispatch is still the latest.
    ///
    /// After a page lands the sentinel is polled again: with the cursor
    /// still at the bottom of the list the next page loads without further
    /// input.
    fn handle_search_completed(&mut self, seq: u64, page: &SearchPage) -> Option<Cmd> {
        if !self.results.apply_page(seq, page.clone()) {
            return None;
        }
        self.rebuild_visible_indices();
        self.clamp_cursor();
        self.maybe_load_more()
    }

    fn handle_search_failed(&mut self, seq: u64, message: &str) -> Option<Cmd> {
        if self.results.apply_error(seq, message) {
            self.rebuild_visible_indices();
            self.clamp_cursor();
        }
        None
    }

    /// Explicitly requests the next page of the current query.
    fn handle_load_more(&mut self) -> Option<Cmd> {
        if !self.has_more() {
            return None;
        }
        let ticket = self.results.begin_load_more()?;
        Some(Self::search_cmd(self.searched_query.clone(), ticket))
    }

    /// Polls the load-more sentinel and dispatches the next page fetch when
    /// it fires.
    pub(super) fn maybe_load_more(&mut self) -> Option<Cmd> {
        let visible = self.visible_indices.len();
        let in_view =
            visible > 0 && self.cursor_position.saturating_add(SCROLL_LOOKAHEAD) >= visible;
        let has_more = self.has_more();
        let busy = self.results.is_loading();

        if !self.sentinel.poll(in_view, has_more, busy) {
            return None;
        }
        let ticket = self.results.begin_load_more()?;
        Some(Self::search_cmd(self.searched_query.clone(), ticket))
    }

    /// Dispatches detail pane messages to their handlers.
    pub(super) fn handle_details_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::OpenDetails => self.handle_open_details(),
            AppMsg::DetailsLoaded { seq, details } => {
                self.handle_details_loaded(*seq, details);
                None
            }
            AppMsg::DetailsFailed { seq, message } => {
                self.handle_details_failed(*seq, message);
                None
            }
            _ => None,
        }
    }

    /// Opens the detail pane for the repository under the cursor.
    ///
    /// Each open bumps the detail sequence, superseding whatever fetch was
    /// in flight for a previously viewed repository.
    fn handle_open_details(&mut self) -> Option<Cmd> {
        let repo = self.selected_repo()?.clone();
        let seq = self.detail_seq.advance();
        self.detail = DetailState::Loading {
            full_name: repo.full_name.clone(),
        };
        Some(Self::details_cmd(repo.owner_login, repo.name, seq))
    }

    fn handle_details_loaded(&mut self, seq: u64, details: &RepositoryDetails) {
        if !self.detail_seq.is_current(seq) || !self.detail.is_open() {
            tracing::debug!(seq, "discarding superseded detail outcome");
            return;
        }
        self.detail = DetailState::Ready(details.clone());
    }

    fn handle_details_failed(&mut self, seq: u64, message: &str) {
        if !self.detail_seq.is_current(seq) || !self.detail.is_open() {
            tracing::debug!(seq, "discarding superseded detail failure");
            return;
        }
        self.detail = DetailState::Failed {
            message: message.to_owned(),
        };
    }

    /// Closes the detail pane and supersedes any in-flight detail fetch.
    pub(super) fn close_details(&mut self) {
        self.detail = DetailState::Hidden;
        let _superseded = self.detail_seq.advance();
    }

    /// Creates a command that fetches one page of search results.
    pub(super) fn search_cmd(query: String, ticket: FetchTicket) -> Cmd {
        Box::pin(async move {
            let msg = match crate::tui::fetch_search(&query, ticket.page()).await {
                Ok(page) => AppMsg::SearchCompleted {
                    seq: ticket.seq(),
                    page,
                },
                Err(error) => AppMsg::search_failed(ticket.seq(), &error),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }

    /// Creates a command that fetches repository details.
    pub(super) fn details_cmd(owner: String, name: String, seq: u64) -> Cmd {
        Box::pin(async move {
            let msg = match crate::tui::fetch_details(&owner, &name).await {
                Ok(details) => AppMsg::DetailsLoaded { seq, details },
                Err(error) => AppMsg::details_failed(seq, &error),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }
}
