//! Notification sound player use case
//!
//! Decides whether a notification sound should play and starts it without
//! ever blocking the caller for long or surfacing a failure. A late sound is
//! more confusing than a missing one, so anything that does not start
//! within [`PLAYBACK_TIMEOUT`] is abandoned.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::config::{
    configuration_schema, AUDIO_NOTIFICATIONS_BREAKPOINT_HIT, AUDIO_NOTIFICATIONS_ENABLED,
};
use crate::domain::sound::SoundId;

use super::ports::{AudioNotificationService, ConfigurationReader, MediaPlayer, PlaybackError};

/// Deadline for playback to start
pub const PLAYBACK_TIMEOUT: Duration = Duration::from_millis(1000);

/// Directory name holding the media assets
pub const MEDIA_DIR_NAME: &str = "media";

/// Plays notification sounds gated by the `audioNotifications.*` settings
pub struct NotificationSoundPlayer<C, P: ?Sized> {
    config: C,
    media_player: Arc<P>,
    media_dir: PathBuf,
}

impl<C, P> NotificationSoundPlayer<C, P>
where
    C: ConfigurationReader,
    P: MediaPlayer + ?Sized + 'static,
{
    /// Create a player reading assets from the default media directory
    pub fn new(config: C, media_player: Arc<P>) -> Self {
        Self {
            config,
            media_player,
            media_dir: default_media_dir(),
        }
    }

    /// Read assets from a custom media directory
    pub fn with_media_dir(mut self, media_dir: impl Into<PathBuf>) -> Self {
        self.media_dir = media_dir.into();
        self
    }

    /// Directory the media assets are read from
    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }

    /// Path of the media asset for a sound
    pub fn asset_path(&self, sound: SoundId) -> PathBuf {
        self.media_dir.join(sound.asset_file_name())
    }

    /// Play the breakpoint-hit sound, if both its switch and the master switch are on.
    pub async fn play_breakpoint_hit_sound(&self) {
        if !self.setting(AUDIO_NOTIFICATIONS_BREAKPOINT_HIT) {
            return;
        }

        self.play_sound(SoundId::BreakpointHit).await;
    }

    /// Play a sound if the master switch is on.
    ///
    /// Must be called from within a tokio runtime. Returns once playback
    /// has started, failed, or [`PLAYBACK_TIMEOUT`] has elapsed.
    pub async fn play_sound(&self, sound: SoundId) {
        if !self.setting(AUDIO_NOTIFICATIONS_ENABLED) {
            return;
        }

        let asset = self.asset_path(sound);
        if let Err(e) = self.start_playback(asset).await {
            debug!(sound = %sound, error = %e, "notification sound skipped");
        }
    }

    /// Race playback start against the deadline.
    ///
    /// Playback runs as its own task. On timeout the join handle is dropped,
    /// which detaches the task instead of cancelling it.
    async fn start_playback(&self, asset: PathBuf) -> Result<(), PlaybackError> {
        let media_player = Arc::clone(&self.media_player);
        let playback = tokio::spawn(async move { media_player.play(&asset).await });

        match tokio::time::timeout(PLAYBACK_TIMEOUT, playback).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => Err(PlaybackError::PlaybackFailed(format!("Task join error: {}", e))),
            Err(_) => Err(PlaybackError::TimedOut(PLAYBACK_TIMEOUT)),
        }
    }

    /// Read a boolean setting, falling back to its schema default
    fn setting(&self, key: &str) -> bool {
        self.config
            .get_bool(key)
            .or_else(|| configuration_schema().default_bool(key))
            .unwrap_or(false)
    }
}

#[async_trait]
impl<C, P> AudioNotificationService for NotificationSoundPlayer<C, P>
where
    C: ConfigurationReader,
    P: MediaPlayer + ?Sized + 'static,
{
    async fn play_breakpoint_hit_sound(&self) {
        NotificationSoundPlayer::play_breakpoint_hit_sound(self).await
    }
}

/// `media/` beside the running executable, or relative to the working directory
pub fn default_media_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(MEDIA_DIR_NAME)))
        .unwrap_or_else(|| PathBuf::from(MEDIA_DIR_NAME))
}
