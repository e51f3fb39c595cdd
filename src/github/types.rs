use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Body of `GET /search/issues`
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_count: u64,
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub html_url: String,
    pub title: String,
    pub number: u64,
    pub user: SearchUser,
    pub closed_at: Option<DateTime<Utc>>,
    pub pull_request: Option<PullRequestLinks>,
}

#[derive(Debug, Deserialize)]
pub struct SearchUser {
    pub login: String,
}

/// The `pull_request` object the search API attaches to PR results
#[derive(Debug, Deserialize)]
pub struct PullRequestLinks {
    pub merged_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Merged,
    Closed,
}

impl Disposition {
    pub fn label(self) -> &'static str {
        match self {
            Disposition::Merged => "Merged",
            Disposition::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PullRequestRecord {
    pub repo: String, // "owner/repo", or the whole URL if it has an unexpected shape
    pub title: String,
    pub number: u64,
    pub author: String,
    pub url: String,
    pub merged_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl PullRequestRecord {
    /// Merge time if merged, otherwise close time
    pub fn effective_at(&self) -> Option<DateTime<Utc>> {
        self.merged_at.or(self.closed_at)
    }

    pub fn disposition(&self) -> Disposition {
        if self.merged_at.is_some() {
            Disposition::Merged
        } else {
            Disposition::Closed
        }
    }
}

impl From<SearchItem> for PullRequestRecord {
    fn from(item: SearchItem) -> Self {
        let merged_at = item.pull_request.and_then(|pr| pr.merged_at);
        Self {
            repo: repo_label(&item.html_url),
            title: item.title,
            number: item.number,
            author: item.user.login,
            url: item.html_url,
            merged_at,
            closed_at: item.closed_at,
        }
    }
}

/// Extract "owner/repo" from a PR URL
///
/// `https://github.com/owner/repo/pull/123` splits into at least six
/// slash-delimited segments; anything shorter is returned unchanged.
pub fn repo_label(url: &str) -> String {
    let parts: Vec<&str> = url.split('/').collect();
    if parts.len() >= 6 {
        format!("{}/{}", parts[3], parts[4])
    } else {
        url.to_string()
    }
}
