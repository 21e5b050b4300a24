use serde::{Deserialize, Serialize};

// ----------- Domain messages -----------------

/// A news item as handed over by the surrounding application shell
/// (typically a headline plus the feed's summary blurb).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewsItem {
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub feed: String,
    #[serde(default)]
    pub published: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl NewsItem {
    /// Headline and summary joined into the single text the pipeline consumes.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.headline, self.summary)
    }
}

/// Direction of the sampled market view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Bullish,
    Bearish,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "Bullish",
            Sentiment::Bearish => "Bearish",
        }
    }

    pub fn predicted_move(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "Price Spike Likely",
            Sentiment::Bearish => "Downside Risk",
        }
    }

    pub fn direction(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "↑ Upward",
            Sentiment::Bearish => "↓ Downward",
        }
    }
}

/// Closed taxonomy of market-moving event categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    GeopoliticalTension,
    WeatherEvent,
    SupplyShock,
    Infrastructure,
    MarketMovement,
}

impl EventType {
    pub fn label(&self) -> &'static str {
        match self {
            EventType::GeopoliticalTension => "geopolitical_tension",
            EventType::WeatherEvent => "weather_event",
            EventType::SupplyShock => "supply_shock",
            EventType::Infrastructure => "infrastructure",
            EventType::MarketMovement => "market_movement",
        }
    }
}

/// The pipeline's sole output: one enriched, classified record per news item.
///
/// `sentiment`, `confidence`, `predicted_move` and `direction` are sampled,
/// not inferred from the text; consumers must present them as illustrative.
/// Everything else is a pure function of the input text and the tables.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PreprocessedNews {
    pub summary: String,
    pub event_type: EventType,
    pub commodity: String,
    pub region: String,
    pub entities: Vec<String>,
    pub trigger_keywords: Vec<String>,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub predicted_move: String,
    pub direction: String,
    pub trade_horizon: String,
    pub formatted_trader_notes: String,
    pub raw_text_snippet: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_text() {
        let item = NewsItem {
            headline: "OPEC cuts output".to_string(),
            summary: "Quota reduced by 1m bpd".to_string(),
            feed: "wire".to_string(),
            published: None,
            labels: vec![],
        };
        assert_eq!(
            item.combined_text(),
            "OPEC cuts output Quota reduced by 1m bpd"
        );
    }

    #[test]
    fn test_event_type_labels() {
        assert_eq!(EventType::GeopoliticalTension.label(), "geopolitical_tension");
        assert_eq!(EventType::MarketMovement.label(), "market_movement");

        // Wire form matches the label form.
        let json = serde_json::to_string(&EventType::SupplyShock).unwrap();
        assert_eq!(json, "\"supply_shock\"");
    }

    #[test]
    fn test_sentiment_derivations() {
        assert_eq!(Sentiment::Bullish.predicted_move(), "Price Spike Likely");
        assert_eq!(Sentiment::Bullish.direction(), "↑ Upward");
        assert_eq!(Sentiment::Bearish.predicted_move(), "Downside Risk");
        assert_eq!(Sentiment::Bearish.direction(), "↓ Downward");

        let json = serde_json::to_string(&Sentiment::Bullish).unwrap();
        assert_eq!(json, "\"Bullish\"");
    }
}
