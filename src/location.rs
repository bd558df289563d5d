//! Addressable location mirroring.
//!
//! The active query, sort key, and language filter are mirrored into a
//! query string so the current view can be re-created later from startup
//! configuration. Serialisation is a pure function; pushing the result out
//! of the process goes through a [`LocationSink`] at the boundary, decoupled
//! from rendering. Mirroring is one-way: state flows to the location, never
//! back.

use std::sync::{Arc, Mutex};

use crate::search::refine::{LanguageFilter, SortKey};

/// The addressable state of the discovery view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchLocation {
    /// The submitted search query, empty before the first search.
    pub query: String,
    /// Active sort key; omitted from the query string when default.
    pub sort: SortKey,
    /// Active language filter; omitted from the query string when default.
    pub language: LanguageFilter,
}

impl SearchLocation {
    /// Serialises the location into `q=…&sort=…&lang=…` form.
    ///
    /// Default selections are omitted, so a fresh view with no query
    /// serialises to the empty string.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serialiser = url::form_urlencoded::Serializer::new(String::new());
        if !self.query.is_empty() {
            serialiser.append_pair("q", &self.query);
        }
        if let Some(sort) = self.sort.as_param() {
            serialiser.append_pair("sort", sort);
        }
        if let Some(language) = self.language.as_param() {
            serialiser.append_pair("lang", language);
        }
        serialiser.finish()
    }
}

/// A sink that records the latest mirrored location.
pub trait LocationSink: Send + Sync {
    /// Records the current location.
    fn sync(&self, location: &SearchLocation);
}

/// Location sink that drops all updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLocationSink;

impl LocationSink for NoopLocationSink {
    fn sync(&self, _location: &SearchLocation) {}
}

/// Location sink backed by a shared cell.
///
/// The discovery UI writes through its clone on every relevant state
/// change; the binary reads the latest value on exit to print a resume
/// hint.
#[derive(Debug, Default, Clone)]
pub struct SharedLocationSink {
    cell: Arc<Mutex<Option<String>>>,
}

impl SharedLocationSink {
    /// Creates an empty shared sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recently synced query string, if any.
    #[must_use]
    pub fn latest(&self) -> Option<String> {
        self.cell.lock().ok().and_then(|guard| guard.clone())
    }
}

impl LocationSink for SharedLocationSink {
    fn sync(&self, location: &SearchLocation) {
        if let Ok(mut guard) = self.cell.lock() {
            *guard = Some(location.to_query_string());
        }
    }
}
