use anyhow::{Context, Result};
use std::path::Path;

/// Open the generated page in the user's default browser
///
/// # Errors
/// Returns error if the path cannot be resolved or no browser can be opened
pub fn open_page(path: &Path) -> Result<()> {
    let absolute = std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve {}", path.display()))?;
    let target = absolute.to_string_lossy();
    webbrowser::open(&target)
        .with_context(|| format!("Failed to open browser for: {}", target))?;
    Ok(())
}
