use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppCfg {
    #[serde(default)]
    pub pipeline: PipelineCfg,
}

/// Classification tables and sampling knobs.
///
/// Both tables are YAML sequences, not mappings: the row order is load-bearing
/// (classifier tie-breaks and output ordering follow it), and a mapping source
/// could reorder keys on load. Empty tables fall back to the built-ins.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PipelineCfg {
    #[serde(default)]
    pub keywords: Vec<KeywordRowCfg>,
    #[serde(default)]
    pub entities: Vec<EntityRowCfg>,
    /// Fixed seed for the sentiment sampler; omit for per-run entropy.
    #[serde(rename = "sentimentSeed", default)]
    pub sentiment_seed: Option<u64>,
}

/// One commodity category and its ordered trigger keywords.
#[derive(Debug, Deserialize, Clone)]
pub struct KeywordRowCfg {
    pub category: String,
    pub triggers: Vec<String>,
}

/// One entity name and the region it resolves to.
#[derive(Debug, Deserialize, Clone)]
pub struct EntityRowCfg {
    pub name: String,
    pub region: String,
}

impl AppCfg {
    pub fn load(path: &str) -> Result<Self> {
        let cfg = Config::builder()
            .add_source(File::with_name(path))
            .add_source(config::Environment::default().separator("__"))
            .build()
            .context("building config")?;

        let app: AppCfg = cfg.try_deserialize().context("deserializing config")?;
        app.validate()?;
        Ok(app)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for row in &self.pipeline.keywords {
            anyhow::ensure!(
                !row.category.trim().is_empty(),
                "pipeline.keywords: category name must not be empty"
            );
            anyhow::ensure!(
                seen.insert(row.category.clone()),
                "pipeline.keywords: duplicate category '{}'",
                row.category
            );
            anyhow::ensure!(
                !row.triggers.is_empty(),
                "pipeline.keywords.{}: triggers must not be empty",
                row.category
            );
            anyhow::ensure!(
                row.triggers.iter().all(|t| !t.trim().is_empty()),
                "pipeline.keywords.{}: blank trigger keyword",
                row.category
            );
        }
        for row in &self.pipeline.entities {
            anyhow::ensure!(
                !row.name.trim().is_empty(),
                "pipeline.entities: entity name must not be empty"
            );
            anyhow::ensure!(
                !row.region.trim().is_empty(),
                "pipeline.entities.{}: region must not be empty",
                row.name
            );
        }
        Ok(())
    }
}
