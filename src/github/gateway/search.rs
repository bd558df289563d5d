//! Octocrab-backed search gateway.
//!
//! This module contains the Octocrab implementation of [`SearchGateway`]
//! and its HTTP-level tests.

use async_trait::async_trait;
use octocrab::Octocrab;

use crate::github::error::DiscoveryError;
use crate::github::models::{ApiRepositoryDetails, ApiSearchResults, RepositoryDetails, SearchPage};
use crate::github::page::{PAGE_SIZE, PageCursor};

use super::SearchGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

/// Octocrab-backed search gateway.
pub struct OctocrabSearchGateway {
    client: Octocrab,
}

impl OctocrabSearchGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a gateway for the given API base URL and optional token.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::Configuration`] when the base URI cannot be
    /// parsed and [`DiscoveryError::Unexpected`] when Octocrab fails to
    /// construct a client.
    pub fn from_config(api_base: &str, token: Option<&str>) -> Result<Self, DiscoveryError> {
        let client = build_octocrab_client(api_base, token)?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl SearchGateway for OctocrabSearchGateway {
    async fn search(&self, query: &str, page: PageCursor) -> Result<SearchPage, DiscoveryError> {
        let remote_page = page.remote_page().to_string();
        let per_page = PAGE_SIZE.to_string();
        let query_params = [
            ("q", query),
            ("page", remote_page.as_str()),
            ("per_page", per_page.as_str()),
        ];

        let results: ApiSearchResults = self
            .client
            .get("/search/repositories", Some(&query_params))
            .await
            .map_err(|error| map_octocrab_error("search repositories", &error))?;

        tracing::debug!(
            total_count = results.total_count,
            items = results.items.len(),
            remote_page = page.remote_page(),
            "search page fetched"
        );

        Ok(results.into())
    }

    async fn repository_details(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<RepositoryDetails, DiscoveryError> {
        let route = format!("/repos/{owner}/{name}");
        let details: ApiRepositoryDetails = self
            .client
            .get(route.as_str(), None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("load repository details", &error))?;

        Ok(details.into())
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::OctocrabSearchGateway;
    use crate::github::error::DiscoveryError;
    use crate::github::gateway::SearchGateway;
    use crate::github::page::PageCursor;

    fn repository_json(id: u64, full_name: &str, language: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": full_name.rsplit('/').next().unwrap_or(full_name),
            "full_name": full_name,
            "description": "A sample repository",
            "html_url": format!("https://github.com/{full_name}"),
            "stargazers_count": 100,
            "forks_count": 10,
            "open_issues_count": 3,
            "language": language,
            "updated_at": "2025-05-01T00:00:00Z",
            "owner": {
                "login": full_name.split('/').next().unwrap_or(full_name),
                "avatar_url": "https://example.invalid/avatar.png"
            }
        })
    }

    fn gateway_for(server: &MockServer) -> OctocrabSearchGateway {
        OctocrabSearchGateway::from_config(&server.uri(), None)
            .expect("gateway should build against the mock server")
    }

    #[tokio::test]
    async fn search_translates_the_cursor_to_a_one_based_page() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_count": 57,
            "incomplete_results": false,
            "items": [repository_json(1, "facebook/react", "JavaScript")]
        }));

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .and(query_param("q", "react"))
            .and(query_param("page", "2"))
            .and(query_param("per_page", "30"))
            .respond_with(response)
            .mount(&server)
            .await;

        let page = gateway
            .search("react", PageCursor::first().next())
            .await
            .expect("search should succeed");

        assert_eq!(page.total_count, 57);
        assert_eq!(page.items.len(), 1);
        let first = page.items.first().expect("should have a first item");
        assert_eq!(first.full_name, "facebook/react");
    }

    #[tokio::test]
    async fn search_maps_http_failures_to_their_status() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        let response = ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "message": "Validation Failed",
            "documentation_url": "https://docs.github.com/rest/search"
        }));

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(response)
            .mount(&server)
            .await;

        let error = gateway
            .search("react", PageCursor::first())
            .await
            .expect_err("search should fail");

        assert_eq!(error.status(), 422);
        assert!(
            matches!(error, DiscoveryError::Http { .. }),
            "expected Http, got {error:?}"
        );
    }

    #[tokio::test]
    async fn search_normalises_unparseable_bodies_to_status_zero() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_count": "not a number",
            "items": "not a list"
        }));

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(response)
            .mount(&server)
            .await;

        let error = gateway
            .search("react", PageCursor::first())
            .await
            .expect_err("search should fail");

        assert_eq!(error.status(), 0);
    }

    #[tokio::test]
    async fn repository_details_include_subscriber_count() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        let mut body = repository_json(7, "octocat/hello-world", "Rust");
        body["subscribers_count"] = serde_json::json!(42);

        Mock::given(method("GET"))
            .and(path("/repos/octocat/hello-world"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let details = gateway
            .repository_details("octocat", "hello-world")
            .await
            .expect("details should load");

        assert_eq!(details.summary.full_name, "octocat/hello-world");
        assert_eq!(details.subscribers_count, 42);
    }

    #[tokio::test]
    async fn repository_details_map_missing_repositories_to_404() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        let response = ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest/repos"
        }));

        Mock::given(method("GET"))
            .and(path("/repos/nobody/nothing"))
            .respond_with(response)
            .mount(&server)
            .await;

        let error = gateway
            .repository_details("nobody", "nothing")
            .await
            .expect_err("details should fail");

        assert_eq!(error.status(), 404);
    }
}
