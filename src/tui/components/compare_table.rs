//! Side-by-side comparison table for the selected repository pair.

use crate::github::models::RepositorySummary;
use crate::search::compare::CompareSelection;

use super::text_truncate::truncate_to_display_width;

/// Width of the metric label column.
const METRIC_WIDTH: usize = 14;
/// Width of each repository column.
const COLUMN_WIDTH: usize = 28;

/// Component for displaying the comparison table.
///
/// The table only renders once the full pair is selected; with fewer than
/// two selections the discovery view shows helper text instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompareTableComponent;

impl CompareTableComponent {
    /// Creates a new comparison table component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the comparison table as a string.
    #[must_use]
    pub fn view(&self, selection: &CompareSelection) -> String {
        let [first, second] = selection.selected() else {
            return String::new();
        };

        let mut output = String::new();
        output.push_str(&render_header(first, second));
        output.push_str(&render_metric("Stars", first, second, |repo| {
            repo.stargazers_count.to_string()
        }));
        output.push_str(&render_metric("Forks", first, second, |repo| {
            repo.forks_count.to_string()
        }));
        output.push_str(&render_metric("Open issues", first, second, |repo| {
            repo.open_issues_count.to_string()
        }));
        output.push_str(&render_metric("Last updated", first, second, |repo| {
            repo.updated_at.format("%Y-%m-%d").to_string()
        }));
        output.push_str(&render_metric("Language", first, second, |repo| {
            repo.language.clone().unwrap_or_else(|| "-".to_owned())
        }));
        output
    }
}

fn render_header(first: &RepositorySummary, second: &RepositorySummary) -> String {
    format!(
        "  {blank:metric$}{a:column$}{b:column$}\n",
        blank = "",
        metric = METRIC_WIDTH,
        column = COLUMN_WIDTH,
        a = truncate_to_display_width(&first.full_name, COLUMN_WIDTH.saturating_sub(2)),
        b = truncate_to_display_width(&second.full_name, COLUMN_WIDTH.saturating_sub(2)),
    )
}

fn render_metric(
    label: &str,
    first: &RepositorySummary,
    second: &RepositorySummary,
    value: impl Fn(&RepositorySummary) -> String,
) -> String {
    format!(
        "  {label:metric$}{a:column$}{b:column$}\n",
        metric = METRIC_WIDTH,
        column = COLUMN_WIDTH,
        a = value(first),
        b = value(second),
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::CompareTableComponent;
    use crate::github::models::RepositorySummary;
    use crate::search::compare::CompareSelection;

    fn repo(id: u64, full_name: &str, stars: u64) -> RepositorySummary {
        RepositorySummary {
            id,
            name: full_name.to_owned(),
            full_name: full_name.to_owned(),
            description: None,
            html_url: format!("https://github.com/{full_name}"),
            stargazers_count: stars,
            forks_count: 10,
            open_issues_count: 2,
            language: Some("Rust".to_owned()),
            updated_at: Utc
                .with_ymd_and_hms(2025, 3, 14, 0, 0, 0)
                .single()
                .expect("timestamp should be valid"),
            owner_login: "owner".to_owned(),
            owner_avatar_url: "https://example.invalid/avatar.png".to_owned(),
        }
    }

    #[test]
    fn renders_nothing_without_a_full_pair() {
        let mut selection = CompareSelection::new();
        selection.toggle(&repo(1, "owner/alpha", 5));

        let component = CompareTableComponent::new();
        assert!(component.view(&selection).is_empty());
    }

    #[test]
    fn renders_metric_rows_for_the_pair() {
        let mut selection = CompareSelection::new();
        selection.toggle(&repo(1, "owner/alpha", 5));
        selection.toggle(&repo(2, "owner/beta", 50));

        let component = CompareTableComponent::new();
        let view = component.view(&selection);

        assert!(view.contains("owner/alpha"));
        assert!(view.contains("owner/beta"));
        assert!(view.contains("Stars"));
        assert!(view.contains("Open issues"));
        assert!(view.contains("2025-03-14"));
    }
}
