//! preprocessor.rs
//!
//! Pipeline orchestration: one struct owning the tables and the sentiment
//! source, running the linear stage chain per news item.

use crate::config::config::PipelineCfg;
use crate::core::types::{NewsItem, PreprocessedNews};
use crate::pipeline::classifiers::{classify_commodity, classify_event_type, match_region};
use crate::pipeline::dictionaries::{EntityTable, KeywordTable};
use crate::pipeline::features::{extract_keywords, recognize_entities};
use crate::pipeline::normalizers::normalize_linebreaks;
use crate::pipeline::notes::{
    RandomSentiment, SentimentSource, TRADE_HORIZON, format_trader_notes, summarize,
};

pub struct NewsPreprocessor {
    keywords: KeywordTable,
    entities: EntityTable,
    sentiment: Box<dyn SentimentSource>,
}

impl NewsPreprocessor {
    pub fn new(
        keywords: KeywordTable,
        entities: EntityTable,
        sentiment: Box<dyn SentimentSource>,
    ) -> Self {
        Self {
            keywords,
            entities,
            sentiment,
        }
    }

    /// Built-in tables and an entropy-seeded sampler.
    #[allow(dead_code)]
    pub fn with_default_tables() -> Self {
        Self::new(
            KeywordTable::default_commodity(),
            EntityTable::default_entities(),
            Box::new(RandomSentiment::new()),
        )
    }

    /// Tables and seed from configuration; empty tables use the built-ins.
    pub fn from_cfg(cfg: &PipelineCfg) -> Self {
        let keywords = if cfg.keywords.is_empty() {
            KeywordTable::default_commodity()
        } else {
            KeywordTable::from_rows(&cfg.keywords)
        };
        let entities = if cfg.entities.is_empty() {
            EntityTable::default_entities()
        } else {
            EntityTable::from_rows(&cfg.entities)
        };
        let sentiment: Box<dyn SentimentSource> = match cfg.sentiment_seed {
            Some(seed) => Box::new(RandomSentiment::seeded(seed)),
            None => Box::new(RandomSentiment::new()),
        };

        Self::new(keywords, entities, sentiment)
    }

    /// Core pipeline for one news text:
    /// 1) Normalize
    /// 2) Entity & trigger-keyword extraction
    /// 3) Classifier bank (commodity, region, event type)
    /// 4) Note synthesis
    ///
    /// Total over all inputs; the only non-determinism is the sampled
    /// sentiment/confidence pair.
    pub fn preprocess(&mut self, text: &str) -> PreprocessedNews {
        // 1. Normalize
        let cleaned = normalize_linebreaks(text);

        // 2. Lexical features
        let entities = recognize_entities(&cleaned, &self.entities);
        let trigger_keywords = extract_keywords(&cleaned, &self.keywords);

        // 3. Classifier bank
        let commodity = classify_commodity(
            &trigger_keywords,
            &entities,
            &self.keywords,
            &self.entities,
        );
        let region = match_region(&entities, &self.entities);
        let event_type = classify_event_type(&trigger_keywords);

        // 4. Synthesize the note
        let summary = summarize(&cleaned);
        let draw = self.sentiment.draw();
        let formatted_trader_notes =
            format_trader_notes(&commodity, event_type, &region, draw);

        PreprocessedNews {
            summary,
            event_type,
            commodity,
            region,
            entities,
            trigger_keywords,
            sentiment: draw.sentiment,
            confidence: draw.confidence,
            predicted_move: draw.sentiment.predicted_move().to_string(),
            direction: draw.sentiment.direction().to_string(),
            trade_horizon: TRADE_HORIZON.to_string(),
            formatted_trader_notes,
            raw_text_snippet: text.to_string(),
        }
    }

    /// Headline + summary, joined the way callers hand items over.
    pub fn preprocess_item(&mut self, item: &NewsItem) -> PreprocessedNews {
        self.preprocess(&item.combined_text())
    }
}
