//! Configuration model for the carthage cache tool.
//!
//! This crate provides:
//! - [`Configuration`]: a YAML-backed store with name-based accessors
//! - [`schema`]: the registry of recognized settings and the JSON Schema export
//! - [`merge`]: one-level merge used to layer configurations
//! - [`loader`]: defaults, project file, environment and overrides, in order
//! - [`validation`]: the seam for caller-supplied validity rules
//!
//! # Configuration Precedence (lowest to highest)
//! 1. Default values ([`defaults::defaults`])
//! 2. Project config (`./.carthage_cache.yml`)
//! 3. Environment variables
//! 4. Explicit overrides
//!
//! # Example
//! ```
//! use carthage_cache_config::Configuration;
//! use serde_yaml::Value;
//!
//! let mut config = Configuration::parse("bucket_name: artifacts\n")?;
//! config.set("aws_region", "us-west-2")?;
//!
//! assert_eq!(config.get("aws_region")?, Value::from("us-west-2"));
//! assert!(config.supports("aws_profile"));
//! assert!(config.get("nonexistent_key").is_err());
//! # Ok::<(), carthage_cache_config::ConfigError>(())
//! ```
//!
//! # Environment Variables
//! Read once for the defaults, and again by [`loader::load_layered`]:
//! - `AWS_REGION`
//! - `AWS_ACCESS_KEY_ID`
//! - `AWS_SECRET_ACCESS_KEY`
//! - `AWS_PROFILE`

pub mod configuration;
pub mod defaults;
pub mod error;
pub mod loader;
pub mod merge;
pub mod schema;
pub mod settings;
pub mod validation;
pub mod writer;

// Re-exports for convenient access
pub use configuration::Configuration;
pub use error::{ConfigError, Result};
pub use loader::{LoadedConfiguration, load_layered};
pub use schema::{SchemaRegistry, schema_json_pretty};
pub use settings::{AwsClientOptions, CacheSettings};
pub use validation::ConfigurationValidator;
