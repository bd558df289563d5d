//! Client-side refinement of loaded search results.
//!
//! Refinement never touches the network: it derives a visible ordering over
//! the repositories loaded so far. While either control is away from its
//! default the UI is in refinement mode and incremental loading is paused;
//! returning both controls to their defaults restores discovery order and
//! re-enables pagination over the list as currently loaded.

use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::github::error::DiscoveryError;
use crate::github::models::RepositorySummary;

/// Sort key applied to the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Discovery order as returned by the remote service.
    #[default]
    None,
    /// Descending stargazer count.
    Stars,
    /// Descending fork count.
    Forks,
    /// Most recently updated first.
    RecentlyUpdated,
}

impl SortKey {
    /// Returns a human-readable label for display in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None (discovery order)",
            Self::Stars => "Stars",
            Self::Forks => "Forks",
            Self::RecentlyUpdated => "Recently updated",
        }
    }

    /// Returns the query-parameter value, or `None` for the default key.
    #[must_use]
    pub const fn as_param(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Stars => Some("stars"),
            Self::Forks => Some("forks"),
            Self::RecentlyUpdated => Some("updated"),
        }
    }

    /// Returns the next key in the cycle order.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::None => Self::Stars,
            Self::Stars => Self::Forks,
            Self::Forks => Self::RecentlyUpdated,
            Self::RecentlyUpdated => Self::None,
        }
    }
}

impl FromStr for SortKey {
    type Err = DiscoveryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "none" => Ok(Self::None),
            "stars" => Ok(Self::Stars),
            "forks" => Ok(Self::Forks),
            "updated" => Ok(Self::RecentlyUpdated),
            other => Err(DiscoveryError::Configuration {
                message: format!(
                    "unknown sort key `{other}` (expected none, stars, forks, or updated)"
                ),
            }),
        }
    }
}

/// Language filter applied to the visible list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LanguageFilter {
    /// Show every repository.
    #[default]
    All,
    /// Show only repositories whose primary language matches exactly.
    Language(String),
}

impl LanguageFilter {
    /// Returns a human-readable label for display in the UI.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Language(language) => language.as_str(),
        }
    }

    /// Returns the query-parameter value, or `None` for the default filter.
    #[must_use]
    pub fn as_param(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Language(language) => Some(language.as_str()),
        }
    }

    /// Returns true if this filter admits the given repository.
    #[must_use]
    pub fn matches(&self, repo: &RepositorySummary) -> bool {
        match self {
            Self::All => true,
            Self::Language(language) => repo
                .language
                .as_ref()
                .is_some_and(|candidate| candidate == language),
        }
    }

    /// Returns the next filter in the cycle over the observed languages.
    ///
    /// `All` advances to the first observed language; the last observed
    /// language wraps back to `All`. An unknown current selection (its
    /// language dropped out of the list) also falls back to `All`.
    #[must_use]
    pub fn cycled(&self, languages: &[String]) -> Self {
        match self {
            Self::All => languages.first().map_or(Self::All, |language| {
                Self::Language(language.clone())
            }),
            Self::Language(current) => languages
                .iter()
                .position(|candidate| candidate == current)
                .and_then(|index| languages.get(index.saturating_add(1)))
                .map_or(Self::All, |language| Self::Language(language.clone())),
        }
    }
}

/// Combined sort and filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Refinement {
    /// Active sort key.
    pub sort: SortKey,
    /// Active language filter.
    pub language: LanguageFilter,
}

impl Refinement {
    /// Returns true when either control is away from its default.
    ///
    /// While active, incremental loading is paused by the discovery view.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.sort != SortKey::None || self.language != LanguageFilter::All
    }

    /// Resets both controls to their defaults.
    pub fn clear(&mut self) {
        self.sort = SortKey::None;
        self.language = LanguageFilter::All;
    }

    /// Derives the visible indices over the loaded repositories.
    ///
    /// Discovery order is preserved when inactive. Otherwise the list is
    /// filtered by exact language match and stable-sorted descending by the
    /// chosen key, so ties keep their loaded order.
    #[must_use]
    pub fn visible_indices(&self, repos: &[RepositorySummary]) -> Vec<usize> {
        let mut indices: Vec<usize> = repos
            .iter()
            .enumerate()
            .filter(|(_, repo)| self.language.matches(repo))
            .map(|(index, _)| index)
            .collect();

        match self.sort {
            SortKey::None => {}
            SortKey::Stars => {
                indices.sort_by_key(|&index| {
                    Reverse(repos.get(index).map_or(0, |repo| repo.stargazers_count))
                });
            }
            SortKey::Forks => {
                indices.sort_by_key(|&index| {
                    Reverse(repos.get(index).map_or(0, |repo| repo.forks_count))
                });
            }
            SortKey::RecentlyUpdated => {
                indices.sort_by_key(|&index| {
                    Reverse(repos.get(index).map(|repo| repo.updated_at))
                });
            }
        }

        indices
    }

    /// Collects the distinct primary languages observed in the loaded list,
    /// sorted alphabetically.
    #[must_use]
    pub fn available_languages(repos: &[RepositorySummary]) -> Vec<String> {
        repos
            .iter()
            .filter_map(|repo| repo.language.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
