use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_USERNAME: &str = "Arghnews";
pub const DEFAULT_SECRET_PATH: &str = "secret.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "index.html";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_API_URL: &str = "https://api.github.com/search/issues";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// GitHub handle whose closed PRs are listed
    pub username: String,
    /// File holding the bearer token
    pub secret_path: PathBuf,
    /// Where the generated page is written
    pub output_path: PathBuf,
    pub user_agent: String,
    /// Issue search endpoint
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            secret_path: PathBuf::from(DEFAULT_SECRET_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
