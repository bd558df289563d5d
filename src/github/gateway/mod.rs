//! Gateways for searching repositories through Octocrab.
//!
//! This module provides a trait-based gateway for communicating with the
//! GitHub API. The trait-based design enables mocking in tests while the
//! Octocrab implementation handles real HTTP requests.

mod client;
mod error_mapping;
mod search;

pub use search::OctocrabSearchGateway;

use async_trait::async_trait;

use crate::github::error::DiscoveryError;
use crate::github::models::{RepositoryDetails, SearchPage};
use crate::github::page::PageCursor;

/// Gateway that can search repositories and load per-repository details.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Fetch one page of search results for a free-text query.
    async fn search(&self, query: &str, page: PageCursor) -> Result<SearchPage, DiscoveryError>;

    /// Fetch extended statistics for a single repository.
    async fn repository_details(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<RepositoryDetails, DiscoveryError>;
}
