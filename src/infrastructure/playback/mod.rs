//! Media playback infrastructure adapters
//!
//! Start notification sounds on the default audio output.

mod decode;
mod noop;
mod rodio_player;

pub use noop::NoOpMediaPlayer;
pub use rodio_player::RodioMediaPlayer;

use std::sync::Arc;

use crate::application::ports::MediaPlayer;

/// Create a media player based on whether sound output is enabled
pub fn create_media_player(enabled: bool) -> Arc<dyn MediaPlayer> {
    if enabled {
        Arc::new(RodioMediaPlayer::new())
    } else {
        Arc::new(NoOpMediaPlayer::new())
    }
}
