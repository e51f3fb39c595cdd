use chrono::{DateTime, Utc};

use crate::github::types::PullRequestRecord;

/// Status text used when an unmerged PR carries no close time
pub const UNKNOWN_DATE: &str = "Unknown date";

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Format a timestamp as "Mar 5 2023" (no leading zero on the day)
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d %Y").to_string()
}

/// "#12 by octocat was merged on Mar 5 2023"
pub fn format_status(pr: &PullRequestRecord) -> String {
    match pr.merged_at {
        Some(merged_at) => format!(
            "#{} by {} was merged on {}",
            pr.number,
            pr.author,
            format_date(merged_at)
        ),
        None => {
            let date = pr
                .closed_at
                .map(format_date)
                .unwrap_or_else(|| UNKNOWN_DATE.to_string());
            format!("#{} by {} was closed on {}", pr.number, pr.author, date)
        }
    }
}

/// Render one PR as an `<li>` block for the contributions list
pub fn format_item(pr: &PullRequestRecord) -> String {
    format!(
        "<li>\n  <strong>{}:</strong>\n  <a href=\"{}\">{}</a><br>\n  <small>{}</small><br>\n  <small>• {}</small>\n</li>",
        html_escape(&pr.repo),
        html_escape(&pr.url),
        html_escape(&pr.title),
        html_escape(&format_status(pr)),
        pr.disposition().label()
    )
}

/// Render all PRs in the given order, joined by newlines
pub fn format_pr_list(prs: &[PullRequestRecord]) -> String {
    prs.iter()
        .map(format_item)
        .collect::<Vec<_>>()
        .join("\n")
}
