use serde_yaml::Value;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("Invalid configuration value: {0}")]
    Deserialize(#[source] serde_yaml::Error),

    #[error("YAML serialize error: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("Configuration root must be a mapping, found {found}")]
    NotAMapping { found: &'static str },

    #[error("Unsupported configuration key: {0}")]
    UnsupportedKey(String),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Short name of a YAML node kind, used in error messages.
pub(crate) const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
