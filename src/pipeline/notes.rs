//! notes.rs
//!
//! Trader-note synthesis: the two-sentence summary, the sampled
//! sentiment/confidence pair, and the templated multi-line note.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::types::{EventType, Sentiment};

pub const TRADE_HORIZON: &str = "24–72h";

/// One sampled sentiment/confidence pair.
#[derive(Debug, Clone, Copy)]
pub struct SentimentDraw {
    pub sentiment: Sentiment,
    /// In [0.60, 1.00], rounded to 2 decimal places.
    pub confidence: f64,
}

/// Source of sentiment/confidence values.
///
/// The shipped implementation is an unweighted coin flip — a stand-in for a
/// real model, NOT analysis of the text. It sits behind this trait so tests
/// can seed it and a genuine classifier can replace it without touching the
/// rest of the pipeline.
pub trait SentimentSource: Send {
    fn draw(&mut self) -> SentimentDraw;
}

/// Uniform random sentiment and confidence.
pub struct RandomSentiment {
    rng: StdRng,
}

impl RandomSentiment {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic draw sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentSource for RandomSentiment {
    fn draw(&mut self) -> SentimentDraw {
        let sentiment = if self.rng.random_bool(0.5) {
            Sentiment::Bullish
        } else {
            Sentiment::Bearish
        };
        let confidence = round2(self.rng.random_range(0.60..=1.00));

        SentimentDraw {
            sentiment,
            confidence,
        }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// First two sentences of the cleaned text: split on literal '.', rejoin the
/// first two fragments, and keep a trailing '.' only when the text had more
/// than two fragments.
pub fn summarize(cleaned: &str) -> String {
    let fragments: Vec<&str> = cleaned.split('.').collect();
    let mut summary = fragments
        .iter()
        .take(2)
        .copied()
        .collect::<Vec<_>>()
        .join(".");
    if fragments.len() > 2 {
        summary.push('.');
    }
    summary
}

/// Fixed multi-line note template over the classification and the draw.
pub fn format_trader_notes(
    commodity: &str,
    event_type: EventType,
    region: &str,
    draw: SentimentDraw,
) -> String {
    format!(
        "Trader Notes\n\
         Commodity: {commodity} | Event: {event} | Region: {region}\n\
         Sentiment: {sentiment} ({confidence:.0}% confidence)\n\
         Expected: {predicted_move} ({direction}) within {horizon}",
        commodity = commodity,
        event = event_type.label(),
        region = region,
        sentiment = draw.sentiment.as_str(),
        confidence = draw.confidence * 100.0,
        predicted_move = draw.sentiment.predicted_move(),
        direction = draw.sentiment.direction(),
        horizon = TRADE_HORIZON,
    )
}
