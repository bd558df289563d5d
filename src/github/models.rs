//! Data models representing repository summaries, details, and search pages.
//!
//! Types prefixed with `Api` are internal deserialisation targets that
//! convert into public domain types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Repository summary as returned by the search endpoint.
///
/// Identity is the `id` field; every other field is a snapshot taken at
/// fetch time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    /// Repository identifier.
    pub id: u64,
    /// Short name (e.g. `hello-world`).
    pub name: String,
    /// Owner-qualified name (e.g. `octocat/hello-world`).
    pub full_name: String,
    /// Free-text description if the owner provided one.
    pub description: Option<String>,
    /// HTML URL for displaying to a user.
    pub html_url: String,
    /// Stargazer count.
    pub stargazers_count: u64,
    /// Fork count.
    pub forks_count: u64,
    /// Open issue count.
    pub open_issues_count: u64,
    /// Primary language if GitHub detected one.
    pub language: Option<String>,
    /// Timestamp of the most recent update.
    pub updated_at: DateTime<Utc>,
    /// Owner login.
    pub owner_login: String,
    /// Owner avatar URL.
    pub owner_avatar_url: String,
}

/// Extended repository statistics shown in the detail pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDetails {
    /// The summary fields for the repository.
    pub summary: RepositorySummary,
    /// Subscriber (watcher) count, only present on the detail endpoint.
    pub subscribers_count: u64,
}

/// One page of search results together with the remote total-match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    /// Summaries in the order the remote service returned them.
    pub items: Vec<RepositorySummary>,
    /// Total matches reported by the remote service for the whole query.
    pub total_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiSearchResults {
    pub(super) total_count: u64,
    pub(super) items: Vec<ApiRepository>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRepository {
    pub(super) id: u64,
    pub(super) name: String,
    pub(super) full_name: String,
    pub(super) description: Option<String>,
    pub(super) html_url: String,
    pub(super) stargazers_count: u64,
    pub(super) forks_count: u64,
    pub(super) open_issues_count: u64,
    pub(super) language: Option<String>,
    pub(super) updated_at: DateTime<Utc>,
    pub(super) owner: ApiOwner,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiOwner {
    pub(super) login: String,
    pub(super) avatar_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRepositoryDetails {
    #[serde(flatten)]
    pub(super) repository: ApiRepository,
    pub(super) subscribers_count: u64,
}

impl From<ApiRepository> for RepositorySummary {
    fn from(value: ApiRepository) -> Self {
        Self {
            id: value.id,
            name: value.name,
            full_name: value.full_name,
            description: value.description,
            html_url: value.html_url,
            stargazers_count: value.stargazers_count,
            forks_count: value.forks_count,
            open_issues_count: value.open_issues_count,
            language: value.language,
            updated_at: value.updated_at,
            owner_login: value.owner.login,
            owner_avatar_url: value.owner.avatar_url,
        }
    }
}

impl From<ApiSearchResults> for SearchPage {
    fn from(value: ApiSearchResults) -> Self {
        Self {
            items: value.items.into_iter().map(ApiRepository::into).collect(),
            total_count: value.total_count,
        }
    }
}

impl From<ApiRepositoryDetails> for RepositoryDetails {
    fn from(value: ApiRepositoryDetails) -> Self {
        Self {
            summary: value.repository.into(),
            subscribers_count: value.subscribers_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiRepository, ApiRepositoryDetails, ApiSearchResults, SearchPage};

    fn sample_repository_json() -> serde_json::Value {
        serde_json::json!({
            "id": 10_270_250,
            "name": "react",
            "full_name": "facebook/react",
            "description": "The library for web and native user interfaces.",
            "html_url": "https://github.com/facebook/react",
            "stargazers_count": 230_000,
            "forks_count": 47_000,
            "open_issues_count": 800,
            "language": "JavaScript",
            "updated_at": "2025-06-01T12:00:00Z",
            "owner": {
                "login": "facebook",
                "avatar_url": "https://avatars.githubusercontent.com/u/69631?v=4"
            }
        })
    }

    #[test]
    fn api_repository_converts_into_summary() {
        let api: ApiRepository = serde_json::from_value(sample_repository_json())
            .expect("sample repository should deserialise");

        let summary: super::RepositorySummary = api.into();
        assert_eq!(summary.id, 10_270_250);
        assert_eq!(summary.full_name, "facebook/react");
        assert_eq!(summary.language.as_deref(), Some("JavaScript"));
        assert_eq!(summary.owner_login, "facebook");
    }

    #[test]
    fn search_results_preserve_item_order_and_total() {
        let mut second = sample_repository_json();
        second["id"] = serde_json::json!(2);
        second["full_name"] = serde_json::json!("preactjs/preact");

        let api: ApiSearchResults = serde_json::from_value(serde_json::json!({
            "total_count": 57,
            "incomplete_results": false,
            "items": [sample_repository_json(), second]
        }))
        .expect("sample search results should deserialise");

        let page: SearchPage = api.into();
        assert_eq!(page.total_count, 57);
        assert_eq!(
            page.items
                .iter()
                .map(|repo| repo.full_name.as_str())
                .collect::<Vec<_>>(),
            vec!["facebook/react", "preactjs/preact"]
        );
    }

    #[test]
    fn details_flatten_summary_fields_and_subscribers() {
        let mut value = sample_repository_json();
        value["subscribers_count"] = serde_json::json!(6_500);

        let api: ApiRepositoryDetails =
            serde_json::from_value(value).expect("sample details should deserialise");

        let details: super::RepositoryDetails = api.into();
        assert_eq!(details.summary.full_name, "facebook/react");
        assert_eq!(details.subscribers_count, 6_500);
    }

    #[test]
    fn missing_language_deserialises_to_none() {
        let mut value = sample_repository_json();
        value["language"] = serde_json::Value::Null;

        let api: ApiRepository =
            serde_json::from_value(value).expect("repository without language should deserialise");
        assert!(api.language.is_none());
    }
}
