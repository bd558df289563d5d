//! Detail pane state with supersession tracking.
//!
//! Every detail fetch is tagged with a sequence number; closing the pane or
//! opening a different repository bumps the number, so a superseded
//! response is discarded silently and a stale repository's details are
//! never shown.

use crate::github::models::RepositoryDetails;

/// State of the repository detail pane.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    /// Pane is closed.
    #[default]
    Hidden,
    /// A detail fetch is running for the named repository.
    Loading {
        /// Owner-qualified name being loaded, for the pane header.
        full_name: String,
    },
    /// Details are on display.
    Ready(RepositoryDetails),
    /// The fetch failed; the message is displayed in the pane.
    Failed {
        /// Displayable error message.
        message: String,
    },
}

impl DetailState {
    /// Returns true unless the pane is closed.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// Sequence tracking for detail fetches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailSequence(u64);

impl DetailSequence {
    /// Invalidates any in-flight fetch and returns the tag for a new one.
    pub const fn advance(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    /// Returns true if `seq` belongs to the latest dispatched fetch.
    #[must_use]
    pub const fn is_current(self, seq: u64) -> bool {
        self.0 == seq
    }
}
