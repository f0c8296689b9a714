//! Seam for semantic validation.
//!
//! The rules themselves belong to the caller (the cache tool decides what
//! makes a usable configuration). [`Configuration::is_valid`] and
//! [`Configuration::is_read_only`] hand the store's current contents to a
//! [`ConfigurationValidator`].

use crate::Configuration;

/// Decides validity and read-only mode from a configuration's contents.
///
/// Implementations must be pure functions of `config`.
pub trait ConfigurationValidator {
    fn is_valid(&self, config: &Configuration) -> bool;

    /// Whether the configuration only allows downloading (no credentials to
    /// publish with).
    fn is_read_only(&self, config: &Configuration) -> bool;
}

impl<V: ConfigurationValidator + ?Sized> ConfigurationValidator for &V {
    fn is_valid(&self, config: &Configuration) -> bool {
        (**self).is_valid(config)
    }

    fn is_read_only(&self, config: &Configuration) -> bool {
        (**self).is_read_only(config)
    }
}
