//! Reusable UI components for the discovery TUI.

pub mod compare_table;
pub mod repo_detail;
pub mod repo_list;
pub(crate) mod text_truncate;

pub use compare_table::CompareTableComponent;
pub use repo_detail::{RepoDetailComponent, RepoDetailViewContext};
pub use repo_list::{RepoListComponent, RepoListViewContext};
