//! Configuration loading for the CLI.
//!
//! The YAML file named by `--config` is read first, if given; environment
//! overrides are applied on top.

use std::path::Path;

use anyhow::Context;
use rasp_core::NormalizerConfig;

/// Load the effective configuration.
pub fn load(path: Option<&Path>) -> anyhow::Result<NormalizerConfig> {
    let base = match path {
        Some(path) => NormalizerConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => NormalizerConfig::default(),
    };
    let config = base
        .with_env_overrides()
        .context("applying RASP_* environment overrides")?;
    tracing::debug!(
        area_code = %config.default_area_code,
        domains = config.email_domains.len(),
        "configuration loaded"
    );
    Ok(config)
}
