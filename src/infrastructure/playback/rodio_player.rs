//! Rodio-based media player adapter
//!
//! Decodes an asset file and plays it on the default output device.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rodio::{OutputStream, Sink};
use tokio::sync::oneshot;
use tracing::debug;

use super::decode::decode_asset;
use crate::application::ports::{MediaPlayer, PlaybackError};

/// Media player implementation using rodio
pub struct RodioMediaPlayer;

impl RodioMediaPlayer {
    /// Create a new rodio-based media player
    pub fn new() -> Self {
        Self
    }
}

impl Default for RodioMediaPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaPlayer for RodioMediaPlayer {
    async fn play(&self, asset: &Path) -> Result<(), PlaybackError> {
        let asset = asset.to_path_buf();
        let (started_tx, started_rx) = oneshot::channel();

        // File checks and decoding block, and the output stream is not Send,
        // so all of it lives on the blocking thread until the sound ends.
        // Only the start result comes back.
        tokio::task::spawn_blocking(move || play_asset_sync(asset, started_tx));

        started_rx.await.map_err(|_| {
            PlaybackError::PlaybackFailed("Playback thread exited before starting".to_string())
        })?
    }
}

/// Play an asset synchronously (called from spawn_blocking)
fn play_asset_sync(asset: PathBuf, started: oneshot::Sender<Result<(), PlaybackError>>) {
    match start_sink(&asset) {
        Ok((_stream, sink)) => {
            // Receiver may be gone after a timeout; the sound still plays out
            let _ = started.send(Ok(()));
            sink.sleep_until_end();
            debug!(asset = %asset.display(), "notification sound finished");
        }
        Err(e) => {
            let _ = started.send(Err(e));
        }
    }
}

/// Decode the asset, open the default output and start playback
fn start_sink(asset: &Path) -> Result<(OutputStream, Sink), PlaybackError> {
    let source = decode_asset(asset)?;

    let (stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| PlaybackError::DeviceNotAvailable(e.to_string()))?;

    let sink =
        Sink::try_new(&stream_handle).map_err(|e| PlaybackError::PlaybackFailed(e.to_string()))?;
    sink.append(source);

    Ok((stream, sink))
}
