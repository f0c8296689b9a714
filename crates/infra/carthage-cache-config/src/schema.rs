//! Registry of recognized setting names and their storage locations.
//!
//! Every name in the registry is reachable through
//! [`Configuration::get`](crate::Configuration::get) and
//! [`Configuration::set`](crate::Configuration::set); adding a setting only
//! requires a registry entry. Names carrying the `aws_` prefix are stored in
//! the `aws_s3_client_options` group with the prefix stripped, because the S3
//! client takes its credentials, region and profile as one options bundle.
//!
//! The module also exports a JSON Schema of [`CacheSettings`] for editor
//! autocomplete on `.carthage_cache.yml`.

use crate::settings::CacheSettings;
use schemars::{Schema, generate::SchemaSettings};
use std::sync::OnceLock;

/// Key of the nested mapping that holds the namespaced settings.
pub const CLIENT_OPTIONS_KEY: &str = "aws_s3_client_options";

/// Prefix marking a setting as part of the client-options group.
pub const NAMESPACE_PREFIX: &str = "aws_";

/// Built-in settings, in registration order.
pub const BUILTIN_KEYS: &[&str] = &[
    "bucket_name",
    "prune_on_publish",
    "prune_white_list",
    "platforms",
    "aws_region",
    "aws_access_key_id",
    "aws_secret_access_key",
    "aws_profile",
    "tmpdir",
];

/// Ordered, append-only set of recognized setting names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaRegistry {
    keys: Vec<String>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding [`BUILTIN_KEYS`].
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for key in BUILTIN_KEYS {
            registry.register(*key);
        }
        registry
    }

    /// Append `name`. Registering a name twice is a no-op.
    pub fn register(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        if !self.is_recognized(&name) {
            self.keys.push(name);
        }
        self
    }

    pub fn is_recognized(&self, name: &str) -> bool {
        self.keys.iter().any(|k| k == name)
    }

    /// All recognized names, in registration order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

/// The process-wide registry of built-in settings.
pub fn registry() -> &'static SchemaRegistry {
    static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();
    REGISTRY.get_or_init(SchemaRegistry::builtin)
}

/// Where a setting lives in the backing mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location<'a> {
    /// Directly under the given key.
    TopLevel(&'a str),

    /// Under the given key inside the client-options group.
    ClientOption(&'a str),
}

/// Map an external setting name to its storage location.
pub fn resolve(name: &str) -> Location<'_> {
    match name.strip_prefix(NAMESPACE_PREFIX) {
        Some(rest) => Location::ClientOption(rest),
        None => Location::TopLevel(name),
    }
}

/// Generate the JSON Schema for the configuration file.
pub fn schema() -> Schema {
    SchemaSettings::default()
        .into_generator()
        .into_root_schema_for::<CacheSettings>()
}

/// Generate the JSON Schema as a pretty-printed JSON string.
pub fn schema_json_pretty() -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&schema())?)
}
