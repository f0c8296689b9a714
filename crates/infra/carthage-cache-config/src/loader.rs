//! Layered configuration loading.
//!
//! The loading process:
//! 1. Start from the process-wide defaults
//! 2. Merge the project file (`./.carthage_cache.yml`) if present
//! 3. Merge non-empty `AWS_*` environment variables
//! 4. Merge explicit overrides (typically from the command line)
//!
//! Each step uses [`Configuration::merge`], so later layers win per key and the
//! client-options group merges one level deep.

use crate::{ConfigError, Configuration, defaults::CLIENT_OPTION_ENV_VARS};
use anyhow::{Context, Result};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

/// Filename of the per-project config.
pub const PROJECT_FILE: &str = ".carthage_cache.yml";

/// A layer that contributed to a loaded configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    ProjectFile,
    Environment,
    Overrides,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct LoadedConfiguration {
    /// The merged configuration.
    pub config: Configuration,

    /// Path of the project file, whether or not it exists.
    pub path: PathBuf,

    /// Layers that contributed, lowest precedence first.
    pub sources: Vec<ConfigSource>,
}

/// Get the project config file path for a given directory.
pub fn project_config_path(dir: &Path) -> PathBuf {
    dir.join(PROJECT_FILE)
}

/// Load configuration for the project in `dir` using the process environment.
pub fn load_layered(dir: &Path, overrides: Option<Mapping>) -> Result<LoadedConfiguration> {
    load_layered_with(dir, overrides, |name| std::env::var(name).ok())
}

/// Like [`load_layered`], with an explicit environment lookup.
pub fn load_layered_with<F>(
    dir: &Path,
    overrides: Option<Mapping>,
    env: F,
) -> Result<LoadedConfiguration>
where
    F: Fn(&str) -> Option<String>,
{
    let path = project_config_path(dir);
    let mut config = Configuration::defaults().clone();
    let mut sources = vec![ConfigSource::Defaults];

    if let Some(file) = read_yaml_or_none(&path)? {
        tracing::debug!("Merging project config from {}", path.display());
        config.merge(file);
        sources.push(ConfigSource::ProjectFile);
    }

    let env_layer = env_overrides(env);
    if !env_layer.as_mapping().is_empty() {
        tracing::debug!("Merging environment overrides");
        config.merge(env_layer);
        sources.push(ConfigSource::Environment);
    }

    if let Some(overrides) = overrides.filter(|m| !m.is_empty()) {
        tracing::debug!("Merging {} explicit override(s)", overrides.len());
        config.merge(overrides);
        sources.push(ConfigSource::Overrides);
    }

    Ok(LoadedConfiguration {
        config,
        path,
        sources,
    })
}

/// Build the environment layer. Unset or blank variables contribute nothing.
pub fn env_overrides<F>(env: F) -> Configuration
where
    F: Fn(&str) -> Option<String>,
{
    let mut layer = Configuration::default();
    for (key, var) in CLIENT_OPTION_ENV_VARS {
        if let Some(value) = env_trimmed(&env, var) {
            layer.set_client_option(key, Value::from(value));
        }
    }
    layer
}

/// Helper to read and normalize an env var (trim + filter empty).
fn env_trimmed<F>(env: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    env(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read a YAML config file, returning `None` if it doesn't exist.
fn read_yaml_or_none(path: &Path) -> Result<Option<Configuration>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = Configuration::parse(&raw)
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(Some(config))
}
