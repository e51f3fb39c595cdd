pub mod formatter;
pub mod page;
pub mod showcase;
pub mod writer;

pub use formatter::{format_date, format_item, format_pr_list, format_status, html_escape};
pub use page::build_html;
pub use showcase::{ShowcaseEntry, SHOWCASE};
pub use writer::{write_page, WriteError};

use std::io::IsTerminal;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}
