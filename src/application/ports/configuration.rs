//! Configuration reader port
//!
//! Read-only view of the host's settings.

use std::sync::Arc;

use crate::domain::config::AppConfig;

/// Port for reading configuration values
pub trait ConfigurationReader: Send + Sync {
    /// Read a boolean setting. `None` when the key is unset.
    fn get_bool(&self, key: &str) -> Option<bool>;
}

impl ConfigurationReader for AppConfig {
    fn get_bool(&self, key: &str) -> Option<bool> {
        AppConfig::get_bool(self, key)
    }
}

impl<T: ConfigurationReader + ?Sized> ConfigurationReader for Arc<T> {
    fn get_bool(&self, key: &str) -> Option<bool> {
        (**self).get_bool(key)
    }
}
