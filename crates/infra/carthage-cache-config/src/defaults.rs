//! Baseline configuration.
//!
//! [`defaults`] is computed once per process: the credential environment
//! variables and the cache directory are read on first access only.

use crate::Configuration;
use crate::schema::CLIENT_OPTIONS_KEY;
use serde_yaml::{Mapping, Value};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Client-option keys and the environment variables that seed them.
pub const CLIENT_OPTION_ENV_VARS: [(&str, &str); 4] = [
    ("region", "AWS_REGION"),
    ("access_key_id", "AWS_ACCESS_KEY_ID"),
    ("secret_access_key", "AWS_SECRET_ACCESS_KEY"),
    ("profile", "AWS_PROFILE"),
];

/// Build the baseline configuration from an environment lookup and the
/// platform cache directory.
///
/// Unset variables, and a missing cache directory, become null values so that
/// every baseline key is present.
pub fn baseline<F>(env: F, cache_dir: Option<PathBuf>) -> Configuration
where
    F: Fn(&str) -> Option<String>,
{
    let mut client_options = Mapping::new();
    for (key, var) in CLIENT_OPTION_ENV_VARS {
        client_options.insert(Value::from(key), env(var).map_or(Value::Null, Value::from));
    }

    let mut data = Mapping::new();
    data.insert(Value::from("prune_on_publish"), Value::Bool(false));
    data.insert(Value::from("platforms"), Value::Null);
    data.insert(Value::from("prune_white_list"), Value::Null);
    data.insert(
        Value::from(CLIENT_OPTIONS_KEY),
        Value::Mapping(client_options),
    );
    data.insert(
        Value::from("tmpdir"),
        cache_dir.map_or(Value::Null, |dir| {
            Value::from(dir.to_string_lossy().into_owned())
        }),
    );
    Configuration::new(data)
}

/// The process-wide default configuration.
///
/// Concurrent first callers block until the value is built; every caller
/// observes the same instance.
pub fn defaults() -> &'static Configuration {
    static DEFAULTS: OnceLock<Configuration> = OnceLock::new();
    DEFAULTS.get_or_init(|| {
        let config = baseline(|var| std::env::var(var).ok(), dirs::cache_dir());
        tracing::debug!("Built default configuration");
        config
    })
}
