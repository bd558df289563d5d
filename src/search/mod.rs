//! Search state management: loaded results, refinement, and comparison.
//!
//! The types in this module are deliberately free of I/O. The result set is
//! a state machine that hands out fetch tickets and applies outcomes; the
//! discovery UI owns the actual network calls.

pub mod compare;
pub mod refine;
pub mod results;

pub use compare::CompareSelection;
pub use refine::{LanguageFilter, Refinement, SortKey};
pub use results::{FetchTicket, ResultSet};
