//! View rendering methods for the discovery TUI.

use super::DiscoveryApp;
use crate::tui::components::{RepoDetailViewContext, RepoListViewContext};

/// Layout rows reserved for header, search bar, status, refinement bar, and
/// the bottom status bar.
pub(super) const CHROME_HEIGHT: u16 = 6;

impl DiscoveryApp {
    /// Renders the whole view.
    pub(super) fn render(&self) -> String {
        if self.show_help {
            return self.render_help_overlay();
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_search_bar());
        output.push_str(&self.render_status());
        output.push_str(&self.render_refinement_bar());
        output.push_str(&self.render_compare());

        if self.detail.is_open() {
            output.push_str(&self.render_detail_pane());
        } else {
            output.push_str(&self.render_list());
        }

        output.push_str(&self.render_status_bar());
        output
    }

    fn render_header(&self) -> String {
        "repolens \u{2014} discover repositories\n".to_owned()
    }

    fn render_search_bar(&self) -> String {
        if self.search_focused {
            format!("Search: {}\u{258f}\n", self.query_input)
        } else {
            format!("Search: {}  (/ to edit, Enter to submit)\n", self.query_input)
        }
    }

    /// Renders the status area.
    ///
    /// Exactly one of loading, error, idle hint, or empty-result message is
    /// shown; with results on display the line stays blank.
    fn render_status(&self) -> String {
        if self.results.is_loading() {
            return "Loading\u{2026}\n".to_owned();
        }
        if let Some(error) = self.results.error() {
            return format!("Error: {error}\n");
        }
        if self.searched_query.is_empty() {
            return "Enter a search term to discover repositories.\n".to_owned();
        }
        if self.results.repos().is_empty() {
            return "No repositories found.\n".to_owned();
        }
        String::new()
    }

    fn render_refinement_bar(&self) -> String {
        let mut line = format!(
            "Sort: {sort}  Language: {language}",
            sort = self.refinement.sort.label(),
            language = self.refinement.language.label(),
        );
        if self.refinement.is_active() {
            line.push_str("  [refined view \u{2014} loading paused, x to clear]");
        }
        line.push('\n');
        line
    }

    fn render_compare(&self) -> String {
        if self.results.repos().is_empty() {
            return String::new();
        }
        match self.compare.len() {
            0 => "Select up to 2 repositories to compare (c).\n".to_owned(),
            1 => "1 repository selected. Select one more to compare.\n".to_owned(),
            _ => {
                let mut output = "Comparing 2 repositories.\n".to_owned();
                output.push_str(&self.compare_table.view(&self.compare));
                output
            }
        }
    }

    fn render_list(&self) -> String {
        let list_height = usize::from(self.height.saturating_sub(CHROME_HEIGHT)).max(1);
        let ctx = RepoListViewContext {
            repos: self.results.repos(),
            visible_indices: &self.visible_indices,
            cursor_position: self.cursor_position,
            compare: &self.compare,
            max_width: usize::from(self.width),
            visible_height: list_height,
        };
        self.repo_list.view(&ctx)
    }

    fn render_detail_pane(&self) -> String {
        let ctx = RepoDetailViewContext {
            state: &self.detail,
            max_width: usize::from(self.width),
        };
        let mut output = self.detail_component.view(&ctx);
        output.push_str("  (Esc to close)\n");
        output
    }

    fn render_status_bar(&self) -> String {
        let location = self.location().to_query_string();
        let shown = self.visible_indices.len();
        let total = self.results.total_count();
        if location.is_empty() {
            format!("{shown} shown \u{00b7} ? for help\n")
        } else {
            format!("{shown} shown of {total} \u{00b7} ?{location} \u{00b7} ? for help\n")
        }
    }

    fn render_help_overlay(&self) -> String {
        concat!(
            "repolens keys\n",
            "\n",
            "  /        focus the search input\n",
            "  Enter    submit search / open details\n",
            "  j/k      move the cursor\n",
            "  s        cycle the sort key\n",
            "  l        cycle the language filter\n",
            "  x        clear sort and language filter\n",
            "  c/space  toggle comparison for the highlighted repository\n",
            "  Esc      close the topmost overlay\n",
            "  q        quit\n",
        )
        .to_owned()
    }
}
