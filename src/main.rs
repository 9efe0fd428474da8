//! Crawl-Scraper main entry point
//!
//! With `--url` the crawl runs immediately and the process exits; without it
//! the interactive shell starts, pre-loaded with the given settings.

use clap::Parser;
use crawl_scraper::config::{load_config_with_hash, validate, CrawlConfig};
use crawl_scraper::crawler::crawl;
use crawl_scraper::shell::{write_report, Shell};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Crawl-Scraper: a breadth-first page title crawler
///
/// Crawls every page under the seed URL up to the given depth, records each
/// page's title, and writes text, CSV and JSON reports.
#[derive(Parser, Debug)]
#[command(name = "crawl-scraper")]
#[command(version)]
#[command(about = "A breadth-first page title crawler", long_about = None)]
struct Cli {
    /// Seed URL; when given, crawl immediately instead of opening the shell
    #[arg(long)]
    url: Option<String>,

    /// Maximum link depth from the seed
    #[arg(long)]
    depth: Option<u32>,

    /// Maximum number of pages fetched concurrently
    #[arg(long)]
    threads: Option<usize>,

    /// Pause after each page, in seconds
    #[arg(long)]
    delay: Option<f64>,

    /// Prefix of the report files
    #[arg(long)]
    output: Option<String>,

    /// Accepted for compatibility; robots.txt is never consulted
    #[arg(long)]
    ignore_robots: bool,

    /// TOML configuration file providing base settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Applies command-line overrides on top of `config`
    fn apply_overrides(&self, config: &mut CrawlConfig) {
        if let Some(url) = &self.url {
            config.start_url = Some(url.clone());
        }
        if let Some(depth) = self.depth {
            config.max_depth = depth;
        }
        if let Some(threads) = self.threads {
            config.max_concurrency = threads;
        }
        if let Some(delay) = self.delay {
            config.delay_secs = delay;
        }
        if let Some(output) = &self.output {
            config.output_prefix = output.clone();
        }
        if self.ignore_robots {
            config.ignore_robots = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => CrawlConfig::default(),
    };
    cli.apply_overrides(&mut config);
    validate(&config)?;

    if cli.url.is_some() {
        handle_crawl(config).await
    } else {
        handle_shell(config).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("crawl_scraper=info,warn"),
            1 => EnvFilter::new("crawl_scraper=debug,info"),
            2 => EnvFilter::new("crawl_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one crawl and exits
async fn handle_crawl(config: CrawlConfig) -> Result<(), Box<dyn std::error::Error>> {
    match crawl(config).await {
        Ok(report) => {
            let stdout = std::io::stdout();
            write_report(&report, &mut stdout.lock())?;
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}

/// Runs the interactive shell on stdin
async fn handle_shell(config: CrawlConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut shell = Shell::new(config);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    shell.run(stdin, &mut stdout).await?;
    Ok(())
}
