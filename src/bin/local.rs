use anyhow::Context;
use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dailyarxiv::{
    config::{Config, OutputFormat},
    crawler::ListingCrawler,
    storage::LocalSaver
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(categories = ?config.categories, "crawling listing pages");

    let mut crawler = ListingCrawler::from_config(&config)?;
    let results = crawler.get_arxiv_results().await?;
    info!("# results: {}", results.len());

    let saved = match config.format {
        OutputFormat::Jsonl => LocalSaver::save_as_jsonl(&config.output, &results),
        OutputFormat::Markdown => LocalSaver::save_as_readme(&config.output, Utc::now(), &results)
    };
    saved.with_context(|| format!("failed to write {}", config.output.display()))?;
    info!(output = %config.output.display(), "feed written");
    Ok(())
}
