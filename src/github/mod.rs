pub mod client;
pub mod search;
pub mod types;

pub use client::{create_client, SearchClient};
pub use search::{fetch_prs, search_query, PER_PAGE};
pub use types::{repo_label, Disposition, PullRequestRecord};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GitHub request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("GitHub API returned {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Unexpected response from GitHub search: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Invalid {0} header value")]
    InvalidHeader(&'static str),
}
