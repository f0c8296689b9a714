//! Typed snapshot of a [`Configuration`](crate::Configuration).
//!
//! The store itself is an untyped mapping; callers that want concrete types
//! deserialize it into [`CacheSettings`]. Unknown keys are ignored and missing
//! keys take their defaults, so partial documents work.

use schemars::JsonSchema;
use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Settings recognized by the cache tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CacheSettings {
    /// S3 bucket holding the cached archives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,

    /// Prune unused archives after publishing.
    #[serde(deserialize_with = "null_as_default")]
    pub prune_on_publish: bool,

    /// Frameworks that are never pruned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prune_white_list: Option<Vec<String>>,

    /// Restrict operations to these platforms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,

    /// Scratch directory for archive creation and download.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmpdir: Option<PathBuf>,

    /// Options bundle handed to the S3 client.
    pub aws_s3_client_options: AwsClientOptions,
}

/// Region, credentials and profile for the S3 client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AwsClientOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,

    /// Never serialized back out.
    #[serde(skip_serializing, deserialize_with = "deserialize_secret")]
    #[schemars(with = "Option<String>")]
    pub secret_access_key: Option<SecretString>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

impl AwsClientOptions {
    /// Whether an access key pair is present.
    pub fn has_static_credentials(&self) -> bool {
        self.access_key_id.is_some() && self.secret_access_key.is_some()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(SecretString::from))
}
