//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::config::{AUDIO_NOTIFICATIONS_BREAKPOINT_HIT, AUDIO_NOTIFICATIONS_ENABLED};
use crate::domain::sound::SoundId;

/// SoundCue - notification sounds for debugger events
#[derive(Parser, Debug)]
#[command(name = "sound-cue")]
#[command(version)]
#[command(about = "Play notification sounds for debugger events, gated by user settings")]
#[command(long_about = None)]
pub struct Cli {
    /// Directory holding the sound assets (<sound>.webm)
    #[arg(long, value_name = "DIR", env = "SOUND_CUE_MEDIA_DIR", global = true)]
    pub media_dir: Option<PathBuf>,

    /// Never output sound, even when enabled in the settings
    #[arg(long, global = true)]
    pub silent: bool,

    /// Show debug logs on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a notification sound if the settings allow it
    Play {
        /// Sound to play
        #[arg(value_enum, default_value_t = SoundArg::BreakpointHit)]
        sound: SoundArg,
    },
    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Print the settings schema as JSON
    Schema,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Sound argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SoundArg {
    BreakpointHit,
}

impl From<SoundArg> for SoundId {
    fn from(arg: SoundArg) -> Self {
        match arg {
            SoundArg::BreakpointHit => SoundId::BreakpointHit,
        }
    }
}

/// Parsed play options
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub sound: SoundId,
    pub media_dir: Option<PathBuf>,
    pub silent: bool,
}

/// Config key for the media directory
pub const MEDIA_DIR_KEY: &str = "mediaDir";

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    AUDIO_NOTIFICATIONS_ENABLED,
    AUDIO_NOTIFICATIONS_BREAKPOINT_HIT,
    MEDIA_DIR_KEY,
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_play_default_sound() {
        let cli = Cli::parse_from(["sound-cue", "play"]);
        assert!(matches!(
            cli.command,
            Commands::Play {
                sound: SoundArg::BreakpointHit
            }
        ));
        assert!(!cli.silent);
        assert!(!cli.verbose);
    }

    #[test]
    fn cli_parses_play_named_sound() {
        let cli = Cli::parse_from(["sound-cue", "play", "breakpoint-hit"]);
        assert!(matches!(
            cli.command,
            Commands::Play {
                sound: SoundArg::BreakpointHit
            }
        ));
    }

    #[test]
    fn cli_rejects_unknown_sound() {
        assert!(Cli::try_parse_from(["sound-cue", "play", "step-over"]).is_err());
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "sound-cue",
            "play",
            "--silent",
            "-v",
            "--media-dir",
            "/opt/sounds",
        ]);
        assert!(cli.silent);
        assert!(cli.verbose);
        assert_eq!(cli.media_dir, Some(PathBuf::from("/opt/sounds")));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from([
            "sound-cue",
            "config",
            "set",
            "audioNotifications.enabled",
            "true",
        ]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "audioNotifications.enabled");
            assert_eq!(value, "true");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn cli_parses_schema() {
        let cli = Cli::parse_from(["sound-cue", "schema"]);
        assert!(matches!(cli.command, Commands::Schema));
    }

    #[test]
    fn sound_arg_converts_to_sound_id() {
        assert_eq!(SoundId::from(SoundArg::BreakpointHit), SoundId::BreakpointHit);
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("audioNotifications.enabled"));
        assert!(is_valid_config_key("audioNotifications.breakpointHit"));
        assert!(is_valid_config_key("mediaDir"));
        assert!(!is_valid_config_key("audioNotifications"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
