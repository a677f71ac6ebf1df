//! Application layer - Use cases and port interfaces
//!
//! Contains the notification sound player and trait definitions
//! for external system interactions.

pub mod ports;
pub mod sound_player;

// Re-export use cases
pub use sound_player::{
    default_media_dir, NotificationSoundPlayer, MEDIA_DIR_NAME, PLAYBACK_TIMEOUT,
};
