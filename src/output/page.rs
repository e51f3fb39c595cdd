use crate::github::types::PullRequestRecord;
use crate::output::formatter::{format_pr_list, html_escape};
use crate::output::showcase::{format_header, format_showcase, PRS_ANCHOR, SHOWCASE};

const STYLE: &str = r##"<style>
  body {
    font-family: system-ui, sans-serif;
    max-width: 850px;
    margin: 40px auto;
    line-height: 1.6;
    padding: 0 20px;
  }
  ul {
    padding-left: 20px;
  }
  .tags {
    margin: 0.25rem 0 0.75rem 0;
  }
  .tag {
    display: inline-block;
    padding: 2px 6px;
    margin: 0 4px 4px 0;
    border-radius: 4px;
    background: #eee;
    font-size: 0.8rem;
  }
</style>"##;

/// Build the full portfolio page.
///
/// The PR list is rendered in the order given; callers sort beforehand.
/// Pure function of its inputs.
pub fn build_html(username: &str, prs: &[PullRequestRecord]) -> String {
    let pr_list_html = format_pr_list(prs);

    format!(
        r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title} – Portfolio</title>
{style}
</head>
<body>

{header}

{showcase}

<h2 id="{anchor}">Open Source Contributions</h2>

<ul>
{prs}
</ul>

</body>
</html>
"##,
        title = html_escape(username),
        style = STYLE,
        header = format_header(),
        showcase = format_showcase(SHOWCASE),
        anchor = PRS_ANCHOR,
        prs = pr_list_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn pr(number: u64, title: &str) -> PullRequestRecord {
        PullRequestRecord {
            repo: "x/y".to_string(),
            title: title.to_string(),
            number,
            author: "octocat".to_string(),
            url: format!("https://github.com/x/y/pull/{}", number),
            merged_at: None,
            closed_at: Some(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()),
        }
    }

    /// The PR section, after the contributions heading
    fn pr_section(html: &str) -> &str {
        let start = html.find("id=\"open-source-prs\"").unwrap();
        &html[start..]
    }

    #[test]
    fn test_one_li_per_pr_in_input_order() {
        // Deliberately not in date or number order
        let prs = vec![pr(7, "seven"), pr(3, "three"), pr(9, "nine")];
        let html = build_html("Arghnews", &prs);
        let section = pr_section(&html);

        assert_eq!(section.matches("<li>").count(), 3);
        let seven = section.find("#7 by").unwrap();
        let three = section.find("#3 by").unwrap();
        let nine = section.find("#9 by").unwrap();
        assert!(seven < three && three < nine);
    }

    #[test]
    fn test_empty_pr_list() {
        let html = build_html("Arghnews", &[]);
        assert!(pr_section(&html).contains("<ul>\n\n</ul>"));
        assert_eq!(pr_section(&html).matches("<li>").count(), 0);
    }

    #[test]
    fn test_scaffold_order() {
        let html = build_html("Arghnews", &[pr(1, "one")]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Arghnews – Portfolio</title>"));

        let style = html.find("<style>").unwrap();
        let header = html.find("<h1>").unwrap();
        let projects = html.find("<h2>Projects</h2>").unwrap();
        let contributions = html.find("Open Source Contributions</h2>").unwrap();
        let item = html.find("#1 by octocat").unwrap();
        assert!(style < header && header < projects && projects < contributions && contributions < item);
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_header_link_targets_contributions_heading() {
        let html = build_html("Arghnews", &[]);
        let link = format!("<a href=\"#{}\">", PRS_ANCHOR);
        let target = format!("<h2 id=\"{}\">", PRS_ANCHOR);
        let link_at = html.find(&link).unwrap();
        let target_at = html.find(&target).unwrap();
        assert!(link_at < target_at);
    }

    #[test]
    fn test_deterministic() {
        let prs = vec![pr(1, "one"), pr(2, "two")];
        assert_eq!(build_html("a", &prs), build_html("a", &prs));
    }

    #[test]
    fn test_escapes_titles() {
        let html = build_html("Arghnews", &[pr(1, "<script>")]);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!pr_section(&html).contains("<script>"));
    }
}
