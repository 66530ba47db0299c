//! Writes `sitemap.xml` for the static site, dating each page with the last
//! git commit that touched it.

mod pages;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use vitrine_core::sitemap::{PageFilter, SitemapEntry, page_url, render_sitemap};

const DEFAULT_BASE: &str = "https://bertrandcausse.com";

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Generate sitemap.xml from the site's HTML pages")]
struct Cli {
    /// Site root (defaults to `.`).
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Canonical site address.
    #[arg(long, env = "SITE_BASE", default_value = DEFAULT_BASE)]
    base: String,

    /// Output file (defaults to `<root>/sitemap.xml`).
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let today = chrono::Local::now().date_naive().to_string();

    let pages = pages::collect_pages(&cli.root, &PageFilter::default())?;
    let entries: Vec<SitemapEntry> = pages
        .iter()
        .map(|rel| {
            let lastmod = pages::last_commit_date(&cli.root, rel).unwrap_or_else(|| today.clone());
            SitemapEntry {
                loc: page_url(&cli.base, &pages::url_path(rel)),
                lastmod,
            }
        })
        .collect();

    let output = cli
        .output
        .unwrap_or_else(|| cli.root.join("sitemap.xml"));
    std::fs::write(&output, render_sitemap(&entries))
        .with_context(|| format!("writing {}", output.display()))?;
    tracing::info!(urls = entries.len(), path = %output.display(), "sitemap written");
    Ok(())
}
