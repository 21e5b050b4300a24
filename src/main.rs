mod config;
mod core;
mod pipeline;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{info, warn};

use crate::config::config::AppCfg;
use crate::pipeline::preprocessor::NewsPreprocessor;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    dotenv::dotenv().ok();

    let cfg = AppCfg::load("config.yml")?;

    info!("Starting up");
    warn!("Sentiment/confidence fields are randomly sampled placeholders, not analysis");

    let mut preprocessor = NewsPreprocessor::from_cfg(&cfg.pipeline);

    // One news text per stdin line, one JSON record per stdout line.
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record = preprocessor.preprocess(&line);
        info!(
            commodity = %record.commodity,
            event = record.event_type.label(),
            region = %record.region,
            entities = record.entities.len(),
            "Processed news item"
        );

        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;
    }

    info!("Input drained, exiting");
    Ok(())
}
