//! State machines owned by the discovery TUI.

pub mod detail;
pub mod sentinel;

pub use detail::DetailState;
pub use sentinel::ScrollSentinel;
