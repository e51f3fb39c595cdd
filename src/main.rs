use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::time::Instant;

use pr_folio::error::{EXIT_CONFIG, EXIT_SUCCESS};
use pr_folio::PortfolioError;

#[derive(Parser, Debug)]
#[command(name = "pr-folio")]
#[command(about = "Generate a static portfolio page listing your closed GitHub PRs", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ./portfolio.yaml if present)
    #[arg(short, long)]
    config: Option<String>,

    /// Open the generated page in the default browser
    #[arg(long)]
    open: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    let start_time = Instant::now();

    if let Err(e) = pr_folio::logging::init(pr_folio::logging::level_for(cli.verbose)) {
        eprintln!("Logging setup failed: {}", e);
    }

    let config_path = cli.config.map(PathBuf::from);
    let config = match pr_folio::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", PortfolioError::Config(e));
            std::process::exit(EXIT_CONFIG);
        }
    };

    tracing::debug!(
        username = %config.username,
        output = %config.output_path.display(),
        api_url = %config.api_url,
        "loaded config"
    );

    let count = match pr_folio::generate(&config).await {
        Ok(count) => count,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    tracing::debug!(count, elapsed = ?start_time.elapsed(), "done");

    let output = config.output_path.display().to_string();
    if pr_folio::output::should_use_colors() {
        println!("Wrote {} — open it in your browser or run:", output.bold());
        println!("  {}", "python3 -m http.server".cyan());
    } else {
        println!("Wrote {} — open it in your browser or run:", output);
        println!("  python3 -m http.server");
    }

    if cli.open {
        if let Err(e) = pr_folio::browser::open_page(&config.output_path) {
            eprintln!("Failed to open browser: {:#}", e);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
