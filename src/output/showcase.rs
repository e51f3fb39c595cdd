//! Hand-written page content: the header block and the project showcase.

use crate::output::formatter::html_escape;

/// One project in the showcase list
#[derive(Debug, Clone, Copy)]
pub struct ShowcaseEntry {
    pub title: &'static str,
    pub url: &'static str,
    /// Trusted HTML fragment, inserted as-is
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

/// Id of the contributions heading; the header links to it
pub const PRS_ANCHOR: &str = "open-source-prs";

/// Name, tagline, contact and a jump link to the contributions list
pub fn format_header() -> String {
    format!(
        r##"<h1>Justin Riddell – Portfolio</h1>
<p>C++ • Linux • Python</p>

<p>Contact: <a href="mailto:arghnews@hotmail.co.uk">arghnews@hotmail.co.uk</a></p>

<p><a href="#{anchor}">See Open Source Contributions to fmtlib and llvm at the bottom of this page</a></p>

<p>This page is auto-generated via Rust.</p>
<hr>"##,
        anchor = PRS_ANCHOR
    )
}

pub const SHOWCASE: &[ShowcaseEntry] = &[
    ShowcaseEntry {
        title: "Cricket scorer",
        url: "https://github.com/Arghnews/cricket-scorer",
        description: "This project connects a mains-powered LED cricket scoreboard over WiFi to a laptop or Raspberry Pi control box.",
        tags: &[
            "Python 3",
            "Raspberry Pi",
            "Bash",
            "systemd",
            "Reliable UDP",
            "PySimpleGUI",
            "smbus2/I2C",
            "PyInstaller",
            "xlwings",
        ],
    },
    ShowcaseEntry {
        title: "Wordsearch Solver",
        url: "https://github.com/Arghnews/wordsearch_solver",
        description: "C++17 library &amp; ImGui app to solve wordsearches with trie backends and benchmarking.\n    Used forked gperftools with ability to pause and resume profiling <a href=\"https://github.com/Arghnews/gperftools\">here</a>.",
        tags: &[
            "C++17",
            "ImGui",
            "Trie",
            "range-v3",
            "CMake",
            "conan",
            "Google benchmark",
            "catch2",
            "Boost",
        ],
    },
    ShowcaseEntry {
        title: "Simple raspberry pi push pinger",
        url: "https://github.com/Arghnews/pinger",
        description: "A simple script to ping another raspberry pi and send an email notification on connection loss.",
        tags: &["Python 3", "Raspberry Pi", "Email API: mailjet_rest"],
    },
    ShowcaseEntry {
        title: "My bashrc setup",
        url: "https://github.com/Arghnews/bashrc",
        description: "Script to bootstrap my bash environment on fresh Linux installs. Vim setup is out of date. Assumes <code>rg</code>",
        tags: &["Bash", "Linux", "Dotfiles"],
    },
    ShowcaseEntry {
        title: "Raspberry pi chicken coop controller",
        url: "https://github.com/Arghnews/chickenpi",
        description: "Raspberry Pi GPIO controller with camera, web UI and sensors.\n    Code is a mess, but worked for years.",
        tags: &["Python 3", "PHP", "GPIO", "Raspberry Pi", "REST APIs"],
    },
];

/// Render a single showcase entry with its tag badges
pub fn format_entry(entry: &ShowcaseEntry) -> String {
    let tags = entry
        .tags
        .iter()
        .map(|tag| format!("      <span class=\"tag\">{}</span>", html_escape(tag)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "  <li>\n    <a href=\"{}\"><strong>{}</strong><br></a>\n    {}\n    <div class=\"tags\">\n{}\n    </div>\n  </li>",
        html_escape(entry.url),
        html_escape(entry.title),
        entry.description,
        tags
    )
}

/// Render the "Projects" section, closed off with a rule
pub fn format_showcase(entries: &[ShowcaseEntry]) -> String {
    let items = entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("<h2>Projects</h2>\n<ul>\n\n{}\n\n</ul>\n<hr>", items)
}
