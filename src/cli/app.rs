//! App runners for the play and schema commands

use std::env;
use std::process::ExitCode;

use tracing::{debug, warn};

use crate::application::ports::ConfigStore;
use crate::application::{default_media_dir, NotificationSoundPlayer};
use crate::domain::config::{configuration_schema, AppConfig, AudioNotificationsConfig};
use crate::domain::sound::SoundId;
use crate::infrastructure::{create_media_player, TomlConfigStore};

use super::args::PlayOptions;
use super::config_cmd::parse_bool;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment overrides for the two switches
pub const ENV_ENABLED: &str = "SOUND_CUE_ENABLED";
pub const ENV_BREAKPOINT_HIT: &str = "SOUND_CUE_BREAKPOINT_HIT";

/// Trigger a notification sound.
///
/// Exits successfully whether or not anything was heard; playback
/// failures are never reported.
pub async fn run_play(options: PlayOptions) -> ExitCode {
    let cli_config = AppConfig {
        media_dir: options
            .media_dir
            .as_ref()
            .map(|dir| dir.to_string_lossy().to_string()),
        ..Default::default()
    };
    let config = load_merged_config(cli_config).await;

    let media_dir = config.media_dir().unwrap_or_else(default_media_dir);
    debug!(
        sound = %options.sound,
        media_dir = %media_dir.display(),
        enabled = config.enabled_or_default(),
        "playing notification sound"
    );

    let media_player = create_media_player(!options.silent);
    let player = NotificationSoundPlayer::new(config, media_player).with_media_dir(media_dir);

    match options.sound {
        SoundId::BreakpointHit => player.play_breakpoint_hit_sound().await,
    }

    // A sound that started keeps playing on a blocking thread; the runtime
    // waits for it on shutdown.
    ExitCode::from(EXIT_SUCCESS)
}

/// Print the settings schema as JSON
pub fn run_schema() -> ExitCode {
    let presenter = Presenter::new();

    match serde_json::to_string_pretty(&configuration_schema()) {
        Ok(json) => {
            presenter.output(&json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&format!("Failed to serialize schema: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = TomlConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring config file {}: {}", store.path().display(), e);
            AppConfig::empty()
        }
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli_config)
}

/// Settings taken from the environment
fn env_config() -> AppConfig {
    AppConfig {
        audio_notifications: Some(AudioNotificationsConfig {
            enabled: env_bool(ENV_ENABLED),
            breakpoint_hit: env_bool(ENV_BREAKPOINT_HIT),
        }),
        ..Default::default()
    }
}

fn env_bool(name: &str) -> Option<bool> {
    let value = env::var(name).ok().filter(|s| !s.is_empty())?;
    match parse_bool(&value) {
        Ok(flag) => Some(flag),
        Err(()) => {
            warn!("ignoring {}={:?}: expected true or false", name, value);
            None
        }
    }
}
