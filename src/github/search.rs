use serde::Deserialize;

use crate::github::client::SearchClient;
use crate::github::types::{PullRequestRecord, SearchResponse};
use crate::github::FetchError;

/// Results requested per page. Only one page is ever fetched.
pub const PER_PAGE: u32 = 100;

/// Build the search query for closed PRs authored by `username`, skipping
/// archived repositories
pub fn search_query(username: &str) -> String {
    format!("author:{} is:pr is:closed archived:false", username)
}

/// Error body GitHub returns alongside non-2xx statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Search GitHub for the closed pull requests authored by `username`
///
/// Returns the records in the order the API listed them. Anything beyond the
/// first page of `PER_PAGE` results is dropped.
pub async fn fetch_prs(client: &SearchClient, username: &str) -> Result<Vec<PullRequestRecord>, FetchError> {
    let query = search_query(username);
    tracing::debug!(query = %query, url = %client.api_url(), "searching pull requests");

    let per_page = PER_PAGE.to_string();
    let response = client
        .http()
        .get(client.api_url())
        .query(&[("q", query.as_str()), ("per_page", per_page.as_str())])
        .send()
        .await
        .map_err(FetchError::Request)?;

    let status = response.status();
    let body = response.text().await.map_err(FetchError::Request)?;

    if !status.is_success() {
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or_default();
        return Err(FetchError::Status { status, message });
    }

    let results: SearchResponse = serde_json::from_str(&body).map_err(FetchError::Malformed)?;

    let returned = results.items.len() as u64;
    if results.total_count > returned {
        tracing::warn!(
            total = results.total_count,
            returned,
            "search matched more pull requests than fit on one page; the rest are not listed"
        );
    }

    let prs: Vec<PullRequestRecord> = results
        .items
        .into_iter()
        .map(PullRequestRecord::from)
        .collect();

    tracing::debug!(count = prs.len(), "fetched pull requests");
    Ok(prs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::create_client;
    use mockito::Matcher;

    const BODY: &str = r#"{
        "total_count": 2,
        "incomplete_results": false,
        "items": [
            {
                "html_url": "https://github.com/llvm/llvm-project/pull/1",
                "title": "Older",
                "number": 1,
                "user": {"login": "Arghnews"},
                "closed_at": "2021-01-01T00:00:00Z",
                "pull_request": {"merged_at": null}
            },
            {
                "html_url": "https://github.com/fmtlib/fmt/pull/2",
                "title": "Newer",
                "number": 2,
                "user": {"login": "Arghnews"},
                "closed_at": "2023-01-01T00:00:00Z",
                "pull_request": {"merged_at": "2023-01-01T00:00:00Z"}
            }
        ]
    }"#;

    #[test]
    fn test_search_query() {
        assert_eq!(
            search_query("Arghnews"),
            "author:Arghnews is:pr is:closed archived:false"
        );
    }

    #[tokio::test]
    async fn test_fetch_prs_sends_query_and_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search/issues")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "author:Arghnews is:pr is:closed archived:false".into()),
                Matcher::UrlEncoded("per_page".into(), "100".into()),
            ]))
            .match_header("authorization", "Bearer test-token")
            .match_header("user-agent", "Mozilla/5.0")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(BODY)
            .create_async()
            .await;

        let client = create_client(
            "test-token",
            "Mozilla/5.0",
            &format!("{}/search/issues", server.url()),
        )
        .unwrap();
        let prs = fetch_prs(&client, "Arghnews").await.unwrap();

        mock.assert_async().await;
        // Fetch order is preserved; sorting happens later
        assert_eq!(prs.len(), 2);
        assert_eq!(prs[0].number, 1);
        assert_eq!(prs[0].repo, "llvm/llvm-project");
        assert_eq!(prs[1].number, 2);
        assert!(prs[1].merged_at.is_some());
    }

    #[tokio::test]
    async fn test_fetch_prs_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search/issues")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"message": "Bad credentials"}"#)
            .create_async()
            .await;

        let client = create_client("bad", "Mozilla/5.0", &format!("{}/search/issues", server.url())).unwrap();
        let err = fetch_prs(&client, "Arghnews").await.unwrap_err();

        mock.assert_async().await;
        match err {
            FetchError::Status { status, message } => {
                assert_eq!(status.as_u16(), 401);
                assert_eq!(message, "Bad credentials");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_prs_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/issues")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"total_count": 1}"#)
            .create_async()
            .await;

        let client = create_client("tok", "Mozilla/5.0", &format!("{}/search/issues", server.url())).unwrap();
        let err = fetch_prs(&client, "Arghnews").await.unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_fetch_prs_truncated_page_still_succeeds() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/issues")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(BODY.replace("\"total_count\": 2", "\"total_count\": 250"))
            .create_async()
            .await;

        let client = create_client("tok", "Mozilla/5.0", &format!("{}/search/issues", server.url())).unwrap();
        let prs = fetch_prs(&client, "Arghnews").await.unwrap();
        assert_eq!(prs.len(), 2);
    }
}
