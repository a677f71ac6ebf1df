//! Media player port for notification sound playback
//!
//! The platform primitive that decodes and outputs a media asset.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while starting playback.
///
/// Callers treat every variant the same way; they exist for diagnostics.
#[derive(Error, Debug, Clone)]
pub enum PlaybackError {
    /// The media asset does not exist
    #[error("Media asset not found: {0}")]
    AssetNotFound(String),

    /// The media asset could not be opened or decoded
    #[error("Failed to decode media asset: {0}")]
    DecodeFailed(String),

    /// No audio output device available
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),

    /// Playback was rejected or aborted
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// Playback did not start before the deadline
    #[error("Playback did not start within {}ms", .0.as_millis())]
    TimedOut(Duration),
}

/// Port trait for media playback
#[async_trait]
pub trait MediaPlayer: Send + Sync {
    /// Start playing a media asset.
    ///
    /// Resolves once playback has started, not when the sound ends.
    async fn play(&self, asset: &Path) -> Result<(), PlaybackError>;
}
