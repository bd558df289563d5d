//! Detail pane component showing one repository's extended statistics.

use crate::tui::state::DetailState;

use super::text_truncate::truncate_to_display_width;

/// Context for rendering the detail pane.
#[derive(Debug, Clone)]
pub struct RepoDetailViewContext<'a> {
    /// Current detail pane state.
    pub state: &'a DetailState,
    /// Maximum pane width in columns.
    pub max_width: usize,
}

/// Component for displaying repository details.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepoDetailComponent;

impl RepoDetailComponent {
    /// Creates a new detail component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the detail pane as a string.
    ///
    /// Exactly one of loading, error, or details is shown; a closed pane
    /// renders nothing.
    #[must_use]
    pub fn view(&self, ctx: &RepoDetailViewContext<'_>) -> String {
        match ctx.state {
            DetailState::Hidden => String::new(),
            DetailState::Loading { full_name } => {
                format!("  Loading details for {full_name}...\n")
            }
            DetailState::Failed { message } => format!("  Error: {message}\n"),
            DetailState::Ready(details) => {
                let mut output = String::new();
                output.push_str(&format!("  {}\n", details.summary.full_name));
                if let Some(description) = details.summary.description.as_deref() {
                    let line = truncate_to_display_width(
                        description,
                        ctx.max_width.saturating_sub(2),
                    );
                    output.push_str(&format!("  {line}\n"));
                }
                output.push_str(&format!(
                    "  \u{2605} Stars: {}\n",
                    details.summary.stargazers_count
                ));
                output.push_str(&format!("  Forks: {}\n", details.summary.forks_count));
                output.push_str(&format!(
                    "  Open issues: {}\n",
                    details.summary.open_issues_count
                ));
                output.push_str(&format!("  Subscribers: {}\n", details.subscribers_count));
                output
            }
        }
    }
}
