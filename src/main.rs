//! Interactive marketplace matching prompt.
//!
//! Reads participant utterances from stdin, drives a conversation session
//! per line, and prints the replies. Type `exit` to quit.

use anyhow::Context;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use trade_matcher::application::services::Session;
use trade_matcher::application::use_cases::FindMatchesUseCase;
use trade_matcher::config::{AppConfig, LogFormat};
use trade_matcher::infrastructure::extraction::RuleBasedExtractor;
use trade_matcher::infrastructure::persistence::InMemoryListingRepository;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    init_tracing(&config);
    info!(
        products = config.patterns.product_keywords.len(),
        "starting trade matcher"
    );

    let extractor = Arc::new(
        RuleBasedExtractor::new(&config.patterns)
            .context("failed to compile extraction patterns")?,
    );
    let listings = Arc::new(
        InMemoryListingRepository::with_demo_listings()
            .context("failed to seed demo listings")?,
    );
    let use_case = Arc::new(FindMatchesUseCase::new(extractor, listings));
    let mut session = Session::new(use_case);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    write_line(&mut stdout, Session::greeting()).await?;
    write_prompt(&mut stdout).await?;

    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.is_empty() {
            write_prompt(&mut stdout).await?;
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            write_line(&mut stdout, "Goodbye!").await?;
            break;
        }

        let reply = session.respond(input).await?;
        write_line(&mut stdout, &reply).await?;
        write_prompt(&mut stdout).await?;
    }

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn write_line(stdout: &mut tokio::io::Stdout, text: &str) -> anyhow::Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}

async fn write_prompt(stdout: &mut tokio::io::Stdout) -> anyhow::Result<()> {
    stdout.write_all(b"> ").await?;
    stdout.flush().await?;
    Ok(())
}
