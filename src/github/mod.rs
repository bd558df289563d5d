//! GitHub search and detail lookup layer.
//!
//! This module groups the typed error taxonomy, the domain models for
//! repository summaries and details, pagination bookkeeping, and the
//! Octocrab-backed gateway used to reach the GitHub REST API.

pub mod error;
pub mod gateway;
pub mod models;
pub mod page;

pub use error::DiscoveryError;
pub use gateway::{OctocrabSearchGateway, SearchGateway};
pub use models::{RepositoryDetails, RepositorySummary, SearchPage};
pub use page::PageCursor;
