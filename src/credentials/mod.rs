use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Token file not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read token file at {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Token file at {} is empty", path.display())]
    Empty { path: PathBuf },
}

/// Read the GitHub token from `path`, trimming surrounding whitespace.
///
/// There is no fallback: a missing, unreadable or blank file is an error.
pub fn load_token(path: &Path) -> Result<String, CredentialError> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CredentialError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            CredentialError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let token = contents.trim();
    if token.is_empty() {
        return Err(CredentialError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(token.to_string())
}
