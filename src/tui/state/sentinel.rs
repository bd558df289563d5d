//! Edge-triggered load-more sentinel.
//!
//! The discovery list paginates when the cursor reaches the bottom of the
//! loaded results. The sentinel turns that condition into a fire-once
//! signal: it fires when the sentinel position is in view while more
//! results are available and nothing is loading, then stays quiet until it
//! re-arms. Leaving view, a running load, or more-available turning false
//! all re-arm it; the last case also releases the observation entirely
//! until more results become available again.

/// Fire-once trigger for incremental loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSentinel {
    armed: bool,
}

impl Default for ScrollSentinel {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSentinel {
    /// Creates an armed sentinel.
    #[must_use]
    pub const fn new() -> Self {
        Self { armed: true }
    }

    /// Observes the current list position and returns true when the caller
    /// should load the next page.
    ///
    /// Fires at most once per arming. While `busy` is true or `has_more` is
    /// false the sentinel never fires and re-arms instead, so a finished
    /// load with the sentinel still in view triggers the next page exactly
    /// once.
    pub const fn poll(&mut self, in_view: bool, has_more: bool, busy: bool) -> bool {
        if !has_more || !in_view || busy {
            self.armed = true;
            return false;
        }
        if self.armed {
            self.armed = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollSentinel;

    #[test]
    fn fires_once_when_entering_view_with_more_available() {
        let mut sentinel = ScrollSentinel::new();
        assert!(sentinel.poll(true, true, false));
        assert!(!sentinel.poll(true, true, false));
    }

    #[test]
    fn never_fires_without_more_results() {
        let mut sentinel = ScrollSentinel::new();
        assert!(!sentinel.poll(true, false, false));
        assert!(!sentinel.poll(true, false, false));
    }

    #[test]
    fn never_fires_while_busy() {
        let mut sentinel = ScrollSentinel::new();
        assert!(!sentinel.poll(true, true, true));
    }

    #[test]
    fn rearms_after_a_load_completes_in_view() {
        let mut sentinel = ScrollSentinel::new();
        assert!(sentinel.poll(true, true, false));
        // The triggered load is now running.
        assert!(!sentinel.poll(true, true, true));
        // It finished with the sentinel still in view: fire again.
        assert!(sentinel.poll(true, true, false));
    }

    #[test]
    fn rearms_after_leaving_view() {
        let mut sentinel = ScrollSentinel::new();
        assert!(sentinel.poll(true, true, false));
        assert!(!sentinel.poll(false, true, false));
        assert!(sentinel.poll(true, true, false));
    }

    #[test]
    fn reestablishes_observation_when_more_becomes_available_again() {
        let mut sentinel = ScrollSentinel::new();
        assert!(sentinel.poll(true, true, false));
        // Refinement mode: no more incremental loading.
        assert!(!sentinel.poll(true, false, false));
        // Back to discovery mode with the sentinel still in view.
        assert!(sentinel.poll(true, true, false));
    }
}
