//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod audio_notification;
pub mod config;
pub mod configuration;
pub mod media_player;

// Re-export common types
pub use audio_notification::AudioNotificationService;
pub use config::ConfigStore;
pub use configuration::ConfigurationReader;
pub use media_player::{MediaPlayer, PlaybackError};
