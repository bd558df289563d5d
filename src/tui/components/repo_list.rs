//! Repository list component for the discovery view.
//!
//! Renders the visible slice of the result list with cursor highlighting,
//! comparison markers, and per-row metadata.

use crate::github::models::RepositorySummary;
use crate::search::compare::CompareSelection;

use super::text_truncate::truncate_to_display_width;

/// Default visible height for the repository list component.
const DEFAULT_VISIBLE_HEIGHT: usize = 20;

/// Context for rendering the repository list view.
///
/// Bundles the data needed to render the visible list without requiring
/// per-frame allocations.
#[derive(Debug, Clone)]
pub struct RepoListViewContext<'a> {
    /// Full slice of loaded repositories.
    pub repos: &'a [RepositorySummary],
    /// Indices of repositories visible under the current refinement.
    pub visible_indices: &'a [usize],
    /// Current cursor position (0-indexed) within the visible list.
    pub cursor_position: usize,
    /// Active comparison selection, for the per-row markers.
    pub compare: &'a CompareSelection,
    /// Maximum row width in columns.
    pub max_width: usize,
    /// Maximum visible height in rows.
    pub visible_height: usize,
}

/// Component for displaying the repository list.
#[derive(Debug, Clone)]
pub struct RepoListComponent {
    visible_height: usize,
}

impl Default for RepoListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl RepoListComponent {
    /// Creates a new repository list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Renders the repository list as a string.
    ///
    /// Only rows within the window around the cursor are rendered, so large
    /// loaded lists stay cheap to draw.
    #[must_use]
    pub fn view(&self, ctx: &RepoListViewContext<'_>) -> String {
        if ctx.visible_indices.is_empty() {
            return String::new();
        }

        let height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };
        let window_start = ctx
            .cursor_position
            .saturating_add(1)
            .saturating_sub(height)
            .min(ctx.visible_indices.len().saturating_sub(height));

        let mut output = String::new();
        for (position, &repo_index) in ctx
            .visible_indices
            .iter()
            .enumerate()
            .skip(window_start)
            .take(height)
        {
            let Some(repo) = ctx.repos.get(repo_index) else {
                continue;
            };
            output.push_str(&render_row(
                repo,
                position == ctx.cursor_position,
                ctx.compare.contains(repo.id),
                ctx.max_width,
            ));
            output.push('\n');
        }
        output
    }
}

fn render_row(repo: &RepositorySummary, selected: bool, compared: bool, max_width: usize) -> String {
    let cursor = if selected { '>' } else { ' ' };
    let marker = if compared { "[x]" } else { "[ ]" };
    let language = repo.language.as_deref().unwrap_or("-");
    let description = repo.description.as_deref().unwrap_or("");

    let row = format!(
        "{cursor} {marker} {full_name}  \u{2605} {stars}  {language}  {description}",
        full_name = repo.full_name,
        stars = repo.stargazers_count,
    );
    truncate_to_display_width(&row, max_width)
}
