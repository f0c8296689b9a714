//! The configuration store.
//!
//! A [`Configuration`] is a thin wrapper over a YAML mapping. Settings are read
//! and written by name through [`Configuration::get`] and
//! [`Configuration::set`]; the name decides the storage location (see
//! [`schema::resolve`]).

use crate::error::{ConfigError, Result, kind_of};
use crate::merge::merge_one_level;
use crate::schema::{self, CLIENT_OPTIONS_KEY, Location, SchemaRegistry};
use crate::settings::CacheSettings;
use crate::validation::ConfigurationValidator;
use serde_yaml::{Mapping, Value};

#[derive(Clone)]
pub struct Configuration {
    data: Mapping,
    schema: &'static SchemaRegistry,
}

impl Configuration {
    /// Wrap `data` as-is, using the built-in registry.
    pub fn new(data: Mapping) -> Self {
        Self::with_schema(data, schema::registry())
    }

    /// Wrap `data` with a caller-provided registry.
    pub fn with_schema(data: Mapping, schema: &'static SchemaRegistry) -> Self {
        Self { data, schema }
    }

    /// Parse a YAML document. An empty document yields an empty store.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_yaml::from_str(text).map_err(ConfigError::Parse)?;
        match value {
            Value::Mapping(data) => Ok(Self::new(data)),
            Value::Null => Ok(Self::default()),
            other => Err(ConfigError::NotAMapping {
                found: kind_of(&other),
            }),
        }
    }

    /// The process-wide default store. See [`crate::defaults`].
    pub fn defaults() -> &'static Self {
        crate::defaults::defaults()
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.data).map_err(ConfigError::Serialize)
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.data
    }

    pub fn into_mapping(self) -> Mapping {
        self.data
    }

    pub fn schema(&self) -> &'static SchemaRegistry {
        self.schema
    }

    /// Whether `name` is a recognized setting. Namespaced settings answer to
    /// their prefixed name (`aws_region`), never to the stored key (`region`).
    pub fn supports(&self, name: &str) -> bool {
        self.schema.is_recognized(name)
    }

    /// Read a setting. Unset settings read as `Value::Null`.
    pub fn get(&self, name: &str) -> Result<Value> {
        self.ensure_supported(name)?;
        let found = match schema::resolve(name) {
            Location::TopLevel(key) => self.data.get(key),
            Location::ClientOption(key) => self
                .data
                .get(CLIENT_OPTIONS_KEY)
                .and_then(Value::as_mapping)
                .and_then(|group| group.get(key)),
        };
        Ok(found.cloned().unwrap_or(Value::Null))
    }

    /// Write a setting. Namespaced settings create the client-options group
    /// on first write.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.ensure_supported(name)?;
        let value = value.into();
        match schema::resolve(name) {
            Location::TopLevel(key) => {
                self.data.insert(Value::from(key), value);
            }
            Location::ClientOption(key) => self.set_client_option(key, value),
        }
        Ok(())
    }

    /// Merge another configuration or raw mapping into this one and return
    /// `self` for chaining.
    ///
    /// Incoming values win. When both sides hold a mapping under the same
    /// key the mappings merge one level deep.
    pub fn merge(&mut self, other: impl Into<Mapping>) -> &mut Self {
        merge_one_level(&mut self.data, other.into());
        self
    }

    /// Like [`merge`](Self::merge), for a dynamically typed value. Anything
    /// other than a mapping is rejected.
    pub fn merge_value(&mut self, other: Value) -> Result<&mut Self> {
        match other {
            Value::Mapping(patch) => Ok(self.merge(patch)),
            other => Err(ConfigError::NotAMapping {
                found: kind_of(&other),
            }),
        }
    }

    /// Deserialize the current contents into typed settings.
    pub fn settings(&self) -> Result<CacheSettings> {
        serde_yaml::from_value(Value::Mapping(self.data.clone()))
            .map_err(ConfigError::Deserialize)
    }

    pub fn valid<V>(validator: &V, config: &Self) -> bool
    where
        V: ConfigurationValidator + ?Sized,
    {
        validator.is_valid(config)
    }

    pub fn read_only<V>(validator: &V, config: &Self) -> bool
    where
        V: ConfigurationValidator + ?Sized,
    {
        validator.is_read_only(config)
    }

    pub fn is_valid<V>(&self, validator: &V) -> bool
    where
        V: ConfigurationValidator + ?Sized,
    {
        Self::valid(validator, self)
    }

    pub fn is_read_only<V>(&self, validator: &V) -> bool
    where
        V: ConfigurationValidator + ?Sized,
    {
        Self::read_only(validator, self)
    }

    pub(crate) fn set_client_option(&mut self, key: &str, value: Value) {
        let slot = self
            .data
            .entry(Value::from(CLIENT_OPTIONS_KEY))
            .or_insert(Value::Mapping(Mapping::new()));
        match slot {
            Value::Mapping(group) => {
                group.insert(Value::from(key), value);
            }
            other => {
                tracing::warn!(
                    "Replacing {} value of {} with a mapping",
                    kind_of(other),
                    CLIENT_OPTIONS_KEY
                );
                let mut group = Mapping::new();
                group.insert(Value::from(key), value);
                *other = Value::Mapping(group);
            }
        }
    }

    fn ensure_supported(&self, name: &str) -> Result<()> {
        if self.supports(name) {
            Ok(())
        } else {
            Err(ConfigError::UnsupportedKey(name.to_string()))
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(Mapping::new())
    }
}

impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configuration")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl From<Mapping> for Configuration {
    fn from(data: Mapping) -> Self {
        Self::new(data)
    }
}

impl From<Configuration> for Mapping {
    fn from(config: Configuration) -> Self {
        config.data
    }
}

impl From<&Configuration> for Mapping {
    fn from(config: &Configuration) -> Self {
        config.data.clone()
    }
}
