pub mod browser;
pub mod config;
pub mod credentials;
pub mod error;
pub mod fetch;
pub mod github;
pub mod logging;
pub mod output;

pub use error::PortfolioError;

use config::Config;

/// Regenerate the portfolio page described by `config`.
///
/// Loads the token, fetches and sorts the PRs, renders the page and only then
/// writes it, so a failure anywhere earlier leaves the previous page in place.
/// Returns the number of PRs listed.
pub async fn generate(config: &Config) -> Result<usize, PortfolioError> {
    let token = credentials::load_token(&config.secret_path)?;
    tracing::debug!(path = %config.secret_path.display(), "loaded token");

    let client = github::create_client(&token, &config.user_agent, &config.api_url)?;
    let prs = fetch::fetch_sorted_prs(&client, &config.username).await?;

    let html = output::build_html(&config.username, &prs);
    output::write_page(&config.output_path, &html)?;

    Ok(prs.len())
}
