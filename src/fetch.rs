use crate::github::{fetch_prs, FetchError, PullRequestRecord, SearchClient};

/// Fetch the user's closed PRs and order them newest first.
///
/// Called once per run from main.rs; the result feeds straight into the page
/// builder.
pub async fn fetch_sorted_prs(
    client: &SearchClient,
    username: &str,
) -> Result<Vec<PullRequestRecord>, FetchError> {
    let mut prs = fetch_prs(client, username).await?;
    sort_newest_first(&mut prs);
    Ok(prs)
}

/// Sort by effective timestamp descending (merge time, else close time).
///
/// Records with neither timestamp go last. The sort is stable, so equal or
/// missing timestamps keep the order the API returned them in.
pub fn sort_newest_first(prs: &mut [PullRequestRecord]) {
    // None < Some(_), so reversing the comparison puts missing timestamps last
    prs.sort_by(|a, b| b.effective_at().cmp(&a.effective_at()));
}
