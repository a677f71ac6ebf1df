//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the audio output and the settings file.

pub mod config;
pub mod playback;

// Re-export adapters
pub use config::TomlConfigStore;
pub use playback::{create_media_player, NoOpMediaPlayer, RodioMediaPlayer};
