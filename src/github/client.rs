use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};

use crate::github::FetchError;

/// Authenticated handle on the issue search endpoint
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    api_url: String,
}

impl SearchClient {
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

/// Create a search client that sends `Authorization: Bearer <token>` and the
/// given user agent on every request
pub fn create_client(token: &str, user_agent: &str, api_url: &str) -> Result<SearchClient, FetchError> {
    let mut headers = HeaderMap::new();

    let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|_| FetchError::InvalidHeader("Authorization"))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent).map_err(|_| FetchError::InvalidHeader("User-Agent"))?,
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

    let http = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(FetchError::Request)?;

    Ok(SearchClient {
        http,
        api_url: api_url.to_string(),
    })
}
