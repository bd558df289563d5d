//! Result-set state machine for paginated search results.
//!
//! A user can retrigger a search before the previous page has finished
//! loading. Every fetch dispatched here is tagged with a monotonically
//! increasing sequence number, and an outcome is applied only while its
//! number is still the latest; anything else is a superseded request whose
//! outcome is discarded silently. Without this, a slow stale response could
//! overwrite results of a newer query.

use crate::github::models::{RepositorySummary, SearchPage};
use crate::github::page::PageCursor;

/// What a dispatched fetch will do to the result set when it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchKind {
    /// Fresh search: the landed page replaces the list.
    Fresh,
    /// Pagination: the landed page is appended to the list.
    NextPage,
}

/// Tag for a dispatched fetch, handed back when the outcome arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    page: PageCursor,
}

impl FetchTicket {
    /// Sequence number identifying this dispatch.
    #[must_use]
    pub const fn seq(self) -> u64 {
        self.seq
    }

    /// Page the fetch should request.
    #[must_use]
    pub const fn page(self) -> PageCursor {
        self.page
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingFetch {
    seq: u64,
    kind: FetchKind,
    page: PageCursor,
}

/// Loaded search results together with loading and error state.
///
/// Exactly one fetch can be pending at a time; dispatching a new search
/// supersedes whatever was in flight.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    repos: Vec<RepositorySummary>,
    total_count: u64,
    cursor: PageCursor,
    loading: bool,
    error: Option<String>,
    next_seq: u64,
    pending: Option<PendingFetch>,
}

impl ResultSet {
    /// Creates an empty result set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the loaded repositories in discovery order.
    #[must_use]
    pub fn repos(&self) -> &[RepositorySummary] {
        &self.repos
    }

    /// Returns the total match count reported by the remote service.
    #[must_use]
    pub const fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Returns the cursor of the most recently applied page.
    #[must_use]
    pub const fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Returns true while a fetch is pending.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the message of the last applied failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns true when the remote service reports more matches than are
    /// currently loaded.
    #[must_use]
    pub fn has_more(&self) -> bool {
        let loaded = u64::try_from(self.repos.len()).unwrap_or(u64::MAX);
        loaded < self.total_count
    }

    /// Starts a fresh search.
    ///
    /// The list and count are cleared immediately so stale results never
    /// linger behind the loading state. Any in-flight fetch is superseded.
    pub fn begin_search(&mut self) -> FetchTicket {
        self.repos.clear();
        self.total_count = 0;
        self.cursor = PageCursor::first();
        self.error = None;
        self.loading = true;
        self.dispatch(FetchKind::Fresh, PageCursor::first())
    }

    /// Starts loading the page after the current cursor.
    ///
    /// Returns `None` while a fetch is already pending, making repeated
    /// load-more requests under contention a no-op.
    pub fn begin_load_more(&mut self) -> Option<FetchTicket> {
        if self.loading {
            return None;
        }
        self.error = None;
        self.loading = true;
        Some(self.dispatch(FetchKind::NextPage, self.cursor.next()))
    }

    /// Applies a successful page fetch.
    ///
    /// Returns `false` when the outcome belongs to a superseded request, in
    /// which case state is left untouched.
    pub fn apply_page(&mut self, seq: u64, page: SearchPage) -> bool {
        let Some(pending) = self.take_pending(seq) else {
            return false;
        };

        match pending.kind {
            FetchKind::Fresh => {
                self.repos = page.items;
                self.cursor = PageCursor::first();
            }
            FetchKind::NextPage => {
                self.repos.extend(page.items);
                self.cursor = pending.page;
            }
        }
        self.total_count = page.total_count;
        self.loading = false;
        self.error = None;
        true
    }

    /// Applies a failed fetch.
    ///
    /// A failed fresh search clears the list; a failed page load keeps the
    /// pages loaded so far. Superseded failures are discarded silently and
    /// return `false`.
    pub fn apply_error(&mut self, seq: u64, message: impl Into<String>) -> bool {
        let Some(pending) = self.take_pending(seq) else {
            return false;
        };

        if pending.kind == FetchKind::Fresh {
            self.repos.clear();
            self.total_count = 0;
            self.cursor = PageCursor::first();
        }
        self.loading = false;
        self.error = Some(message.into());
        true
    }

    /// Clears results, count, error, and loading state unconditionally.
    ///
    /// Any in-flight fetch is invalidated; its outcome will be discarded.
    pub fn reset(&mut self) {
        self.repos.clear();
        self.total_count = 0;
        self.cursor = PageCursor::first();
        self.loading = false;
        self.error = None;
        self.pending = None;
    }

    fn dispatch(&mut self, kind: FetchKind, page: PageCursor) -> FetchTicket {
        self.next_seq = self.next_seq.wrapping_add(1);
        let seq = self.next_seq;
        self.pending = Some(PendingFetch { seq, kind, page });
        FetchTicket { seq, page }
    }

    /// Takes the pending fetch if `seq` is still the latest dispatch.
    fn take_pending(&mut self, seq: u64) -> Option<PendingFetch> {
        if self.pending.is_some_and(|pending| pending.seq == seq) {
            return self.pending.take();
        }
        tracing::debug!(seq, "discarding superseded fetch outcome");
        None
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::ResultSet;
    use crate::github::models::{RepositorySummary, SearchPage};

    fn repo(id: u64) -> RepositorySummary {
        RepositorySummary {
            id,
            name: format!("repo-{id}"),
            full_name: format!("owner/repo-{id}"),
            description: None,
            html_url: format!("https://github.com/owner/repo-{id}"),
            stargazers_count: id,
            forks_count: 0,
            open_issues_count: 0,
            language: None,
            updated_at: Utc
                .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
                .single()
                .expect("timestamp should be valid"),
            owner_login: "owner".to_owned(),
            owner_avatar_url: "https://example.invalid/avatar.png".to_owned(),
        }
    }

    fn page(ids: &[u64], total_count: u64) -> SearchPage {
        SearchPage {
            items: ids.iter().copied().map(repo).collect(),
            total_count,
        }
    }

    #[test]
    fn fresh_search_replaces_the_list() {
        let mut results = ResultSet::new();
        let ticket = results.begin_search();

        assert!(results.is_loading());
        assert!(results.apply_page(ticket.seq(), page(&[1, 2], 2)));

        assert_eq!(results.repos().len(), 2);
        assert_eq!(results.total_count(), 2);
        assert_eq!(results.cursor().index(), 0);
        assert!(!results.is_loading());
        assert!(results.error().is_none());
    }

    #[test]
    fn superseded_success_is_discarded() {
        let mut results = ResultSet::new();
        let first = results.begin_search();
        let second = results.begin_search();

        // The newer response lands first.
        assert!(results.apply_page(second.seq(), page(&[20], 1)));
        // The stale response arrives afterwards and must not apply.
        assert!(!results.apply_page(first.seq(), page(&[10], 1)));

        let ids: Vec<u64> = results.repos().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![20]);
    }

    #[test]
    fn superseded_failure_is_discarded_silently() {
        let mut results = ResultSet::new();
        let first = results.begin_search();
        let second = results.begin_search();

        assert!(results.apply_page(second.seq(), page(&[20], 1)));
        assert!(!results.apply_error(first.seq(), "boom"));
        assert!(results.error().is_none());
        assert_eq!(results.repos().len(), 1);
    }

    #[test]
    fn load_more_is_a_no_op_while_loading() {
        let mut results = ResultSet::new();
        let _ticket = results.begin_search();

        assert!(results.begin_load_more().is_none());
    }

    #[test]
    fn load_more_appends_without_dropping_or_duplicating() {
        let mut results = ResultSet::new();
        let fresh = results.begin_search();
        assert!(results.apply_page(fresh.seq(), page(&[1, 2, 3], 6)));

        let more = results
            .begin_load_more()
            .expect("load more should dispatch when idle");
        assert_eq!(more.page().index(), 1);
        assert!(results.apply_page(more.seq(), page(&[4, 5, 6], 6)));

        let ids: Vec<u64> = results.repos().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(results.cursor().index(), 1);
        assert!(!results.has_more());
    }

    #[test]
    fn partial_final_page_exhausts_the_result_set() {
        // total_count = 57 with a page size of 30: the second page holds 27.
        let mut results = ResultSet::new();
        let fresh = results.begin_search();
        let first_page: Vec<u64> = (1..=30).collect();
        assert!(results.apply_page(fresh.seq(), page(&first_page, 57)));
        assert!(results.has_more());

        let more = results
            .begin_load_more()
            .expect("load more should dispatch when idle");
        let second_page: Vec<u64> = (31..=57).collect();
        assert!(results.apply_page(more.seq(), page(&second_page, 57)));

        assert_eq!(results.repos().len(), 57);
        assert_eq!(results.cursor().index(), 1);
        assert!(results.error().is_none());
        assert!(!results.has_more());
    }

    #[test]
    fn failed_fresh_search_clears_the_list() {
        let mut results = ResultSet::new();
        let fresh = results.begin_search();
        assert!(results.apply_page(fresh.seq(), page(&[1, 2], 2)));

        let retry = results.begin_search();
        assert!(results.apply_error(retry.seq(), "service unavailable"));

        assert!(results.repos().is_empty());
        assert_eq!(results.error(), Some("service unavailable"));
    }

    #[test]
    fn failed_page_load_preserves_loaded_pages() {
        let mut results = ResultSet::new();
        let fresh = results.begin_search();
        assert!(results.apply_page(fresh.seq(), page(&[1, 2], 4)));

        let more = results
            .begin_load_more()
            .expect("load more should dispatch when idle");
        assert!(results.apply_error(more.seq(), "timed out"));

        assert_eq!(results.repos().len(), 2);
        assert_eq!(results.error(), Some("timed out"));
        assert!(!results.is_loading());
    }

    #[test]
    fn reset_returns_to_idle_and_invalidates_in_flight_fetches() {
        let mut results = ResultSet::new();
        let ticket = results.begin_search();
        results.reset();

        assert!(!results.is_loading());
        assert!(!results.apply_page(ticket.seq(), page(&[1], 1)));
        assert!(results.repos().is_empty());
        assert_eq!(results.total_count(), 0);
    }
}
