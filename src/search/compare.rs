//! Comparison selection: a FIFO of at most two repositories.

use crate::github::models::RepositorySummary;

/// Maximum number of repositories that can be compared at once.
pub const MAX_COMPARED: usize = 2;

/// Insertion-ordered selection of repositories to compare.
///
/// Toggling a selected repository removes it. Toggling a new repository
/// while the selection is full evicts the oldest entry, so the selection
/// always keeps the most recent picks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareSelection {
    slots: Vec<RepositorySummary>,
}

impl CompareSelection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected repositories in insertion order.
    #[must_use]
    pub fn selected(&self) -> &[RepositorySummary] {
        &self.slots
    }

    /// Returns the number of selected repositories.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true when nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns true when the selection holds the full pair.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.slots.len() == MAX_COMPARED
    }

    /// Returns true if the repository with the given id is selected.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.slots.iter().any(|repo| repo.id == id)
    }

    /// Toggles a repository in or out of the selection.
    pub fn toggle(&mut self, repo: &RepositorySummary) {
        if self.remove(repo.id) {
            return;
        }
        if self.is_full() {
            self.slots.remove(0);
        }
        self.slots.push(repo.clone());
    }

    /// Removes the repository with the given id.
    ///
    /// Returns `true` if it was selected.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.slots.len();
        self.slots.retain(|repo| repo.id != id);
        self.slots.len() != before
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::CompareSelection;
    use crate::github::models::RepositorySummary;

    fn repo(id: u64) -> RepositorySummary {
        RepositorySummary {
            id,
            name: format!("repo-{id}"),
            full_name: format!("owner/repo-{id}"),
            description: None,
            html_url: format!("https://github.com/owner/repo-{id}"),
            stargazers_count: 0,
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

    fn selected_ids(selection: &CompareSelection) -> Vec<u64> {
        selection.selected().iter().map(|repo| repo.id).collect()
    }

    #[test]
    fn toggling_appends_until_the_pair_is_full() {
        let mut selection = CompareSelection::new();
        selection.toggle(&repo(1));
        selection.toggle(&repo(2));

        assert!(selection.is_full());
        assert_eq!(selected_ids(&selection), vec![1, 2]);
    }

    #[test]
    fn toggling_a_selected_repository_removes_it() {
        let mut selection = CompareSelection::new();
        selection.toggle(&repo(1));
        selection.toggle(&repo(2));
        selection.toggle(&repo(1));

        assert_eq!(selected_ids(&selection), vec![2]);
    }

    #[test]
    fn toggling_a_third_repository_evicts_the_oldest() {
        let mut selection = CompareSelection::new();
        selection.toggle(&repo(1));
        selection.toggle(&repo(2));
        selection.toggle(&repo(3));

        // The newer of the previous pair survives alongside the new pick.
        assert_eq!(selected_ids(&selection), vec![2, 3]);
    }

    #[test]
    fn remove_reports_whether_anything_changed() {
        let mut selection = CompareSelection::new();
        selection.toggle(&repo(1));

        assert!(selection.remove(1));
        assert!(!selection.remove(1));
        assert!(selection.is_empty());
    }

    #[test]
    fn clear_empties_the_selection() {
        let mut selection = CompareSelection::new();
        selection.toggle(&repo(1));
        selection.toggle(&repo(2));
        selection.clear();

        assert!(selection.is_empty());
    }
}
