use atomic_write_file::AtomicWriteFile;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Failed to write {}: {source}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Write the rendered page as UTF-8, replacing any previous content.
///
/// Uses atomic-write-file so the old page survives if the write fails part
/// way through.
pub fn write_page(path: &Path, html: &str) -> Result<(), WriteError> {
    let wrap = |source| WriteError {
        path: path.to_path_buf(),
        source,
    };

    let mut file = AtomicWriteFile::open(path).map_err(wrap)?;
    file.write_all(html.as_bytes()).map_err(wrap)?;
    file.commit().map_err(wrap)?;

    tracing::debug!(path = %path.display(), bytes = html.len(), "wrote page");
    Ok(())
}
