//! Terminal user interface for repository discovery.
//!
//! This module provides an interactive TUI for searching, refining, and
//! comparing repositories using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::DiscoveryApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Detail pane and scroll sentinel state machines
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Startup context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, startup data flows through module-level storage. Call
//! [`set_search_gateway`] (and optionally [`set_initial_location`] and
//! [`set_location_sink`]) before starting the program;
//! `DiscoveryApp::init()` and the fetch commands read them back.

use std::sync::{Arc, OnceLock};

use crate::github::error::DiscoveryError;
use crate::github::gateway::SearchGateway;
use crate::github::models::{RepositoryDetails, SearchPage};
use crate::github::page::PageCursor;
use crate::location::{LocationSink, SearchLocation};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::DiscoveryApp;

/// Global storage for the search gateway used by fetch commands.
static SEARCH_GATEWAY: OnceLock<Arc<dyn SearchGateway>> = OnceLock::new();

/// Global storage for the location the view starts from.
static INITIAL_LOCATION: OnceLock<SearchLocation> = OnceLock::new();

/// Global storage for the sink receiving location updates.
static LOCATION_SINK: OnceLock<Arc<dyn LocationSink>> = OnceLock::new();

/// Installs the search gateway for the TUI application.
///
/// This must be called before starting the bubbletea-rs program; without a
/// gateway every fetch command fails with a configuration error.
///
/// Returns `true` if the gateway was installed, `false` if one was already
/// installed.
pub fn set_search_gateway(gateway: Arc<dyn SearchGateway>) -> bool {
    SEARCH_GATEWAY.set(gateway).is_ok()
}

/// Sets the location the discovery view is created from.
///
/// A non-empty query triggers the initial search when the program starts.
///
/// Returns `true` if the location was set, `false` if it was already set.
pub fn set_initial_location(location: SearchLocation) -> bool {
    INITIAL_LOCATION.set(location).is_ok()
}

/// Installs the sink that receives mirrored location updates.
///
/// Returns `true` if the sink was installed, `false` if one was already
/// installed.
pub fn set_location_sink(sink: Arc<dyn LocationSink>) -> bool {
    LOCATION_SINK.set(sink).is_ok()
}

/// Gets a clone of the initial location from storage.
///
/// Called internally by `DiscoveryApp::init()`. Returns the default
/// location if none was set.
pub(crate) fn initial_location() -> SearchLocation {
    INITIAL_LOCATION.get().cloned().unwrap_or_default()
}

/// Pushes the current location through the installed sink, if any.
pub(crate) fn sync_location(location: &SearchLocation) {
    if let Some(sink) = LOCATION_SINK.get() {
        sink.sync(location);
    }
}

/// Fetches one page of search results through the installed gateway.
pub(crate) async fn fetch_search(
    query: &str,
    page: PageCursor,
) -> Result<SearchPage, DiscoveryError> {
    installed_gateway()?.search(query, page).await
}

/// Fetches repository details through the installed gateway.
pub(crate) async fn fetch_details(
    owner: &str,
    name: &str,
) -> Result<RepositoryDetails, DiscoveryError> {
    installed_gateway()?.repository_details(owner, name).await
}

fn installed_gateway() -> Result<&'static Arc<dyn SearchGateway>, DiscoveryError> {
    SEARCH_GATEWAY.get().ok_or_else(|| DiscoveryError::Configuration {
        message: "search gateway not configured".to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{fetch_search, set_search_gateway};
    use crate::github::gateway::MockSearchGateway;
    use crate::github::models::SearchPage;
    use crate::github::page::PageCursor;

    // This is the only test that installs the process-global gateway; app
    // tests drive `handle_message` directly and never touch it.
    #[tokio::test]
    async fn fetch_search_goes_through_the_installed_gateway() {
        let mut gateway = MockSearchGateway::new();
        gateway.expect_search().returning(|_, _| {
            Ok(SearchPage {
                items: Vec::new(),
                total_count: 7,
            })
        });
        assert!(set_search_gateway(Arc::new(gateway)));

        let page = fetch_search("react", PageCursor::first())
            .await
            .expect("mocked search should succeed");
        assert_eq!(page.total_count, 7);
    }
}
