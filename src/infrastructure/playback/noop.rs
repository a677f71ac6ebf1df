//! No-op media player adapter
//!
//! Used when sound output is disabled for the whole host.

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{MediaPlayer, PlaybackError};

/// Media player that does nothing
pub struct NoOpMediaPlayer;

impl NoOpMediaPlayer {
    /// Create a new no-op media player
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpMediaPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaPlayer for NoOpMediaPlayer {
    async fn play(&self, _asset: &Path) -> Result<(), PlaybackError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn noop_returns_ok_even_for_missing_assets() {
        let player = NoOpMediaPlayer::new();
        assert!(player.play(Path::new("/nonexistent/breakpointHit.webm")).await.is_ok());
    }
}
