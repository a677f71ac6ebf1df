//! Domain layer - Core value objects
//!
//! Contains sound identifiers, settings, the configuration schema and
//! domain errors. This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod sound;

// Re-export common types
pub use config::{configuration_schema, AppConfig, ConfigurationSchema};
pub use error::*;
pub use sound::SoundId;
