use thiserror::Error;

use crate::credentials::CredentialError;
use crate::github::FetchError;
use crate::output::WriteError;

// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_AUTH: i32 = 1;
pub const EXIT_NETWORK: i32 = 2;
pub const EXIT_MALFORMED: i32 = 3;
pub const EXIT_CONFIG: i32 = 4;
pub const EXIT_WRITE: i32 = 5;

/// Everything that can abort a run. None of these are retried.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Config error: {0:#}")]
    Config(anyhow::Error),

    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

impl PortfolioError {
    pub fn exit_code(&self) -> i32 {
        match self {
            PortfolioError::Config(_) => EXIT_CONFIG,
            PortfolioError::Credential(_) => EXIT_AUTH,
            // The token itself cannot be sent as a header value
            PortfolioError::Fetch(FetchError::InvalidHeader("Authorization")) => EXIT_AUTH,
            PortfolioError::Fetch(FetchError::Malformed(_)) => EXIT_MALFORMED,
            PortfolioError::Fetch(_) => EXIT_NETWORK,
            PortfolioError::Write(_) => EXIT_WRITE,
        }
    }
}
