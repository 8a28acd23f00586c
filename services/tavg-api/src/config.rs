//! Sampler configuration loading.

use std::path::Path;

use anyhow::{Context, Result};
use climate_common::BoundingBox;
use tavg_sampler::SamplerConfig;
use tracing::info;

/// Load the sampler configuration.
///
/// Without a path every field takes its built-in default. With a path the
/// YAML file must exist and parse; missing fields fall back to defaults.
pub fn load_sampler_config(path: Option<&Path>) -> Result<SamplerConfig> {
    let config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {:?}", path))?;
            let config: SamplerConfig = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config: {:?}", path))?;
            info!(path = ?path, "Loaded sampler config");
            config
        }
        None => SamplerConfig::default(),
    };

    config.validate().context("Invalid sampler config")?;
    Ok(config)
}

/// Command-line settings that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub request_timeout_secs: Option<u64>,
    pub bbox: Option<BoundingBox>,
}

/// Apply command-line overrides on top of a loaded configuration.
pub fn apply_overrides(mut config: SamplerConfig, overrides: &ConfigOverrides) -> SamplerConfig {
    if let Some(secs) = overrides.request_timeout_secs {
        config.request_timeout_secs = secs;
    }
    if let Some(bbox) = overrides.bbox {
        info!(bbox = %bbox, "Overriding sample region");
        config.bbox = bbox;
    }
    config
}
