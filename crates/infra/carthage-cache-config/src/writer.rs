//! Atomic file writing for configuration files.

use crate::Configuration;
use anyhow::{Context, Result};
use atomicwrites::{AllowOverwrite, AtomicFile};
use std::io::Write;
use std::path::Path;

/// Write `config` as YAML to `path` atomically, creating parent directories.
pub fn write_yaml_atomic(path: &Path, config: &Configuration) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let yaml = config
        .to_yaml()
        .context("Failed to serialize configuration to YAML")?;

    let af = AtomicFile::new(path, AllowOverwrite);
    af.write(|f| f.write_all(yaml.as_bytes()))
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    tracing::debug!("Wrote configuration to {}", path.display());
    Ok(())
}
