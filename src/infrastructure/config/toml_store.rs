//! Settings file persistence
//!
//! Settings live in a single `config.toml` under the user config directory
//! (`$XDG_CONFIG_HOME/sound-cue` on Linux). Keys are camelCase to match the
//! schema, and a missing file reads as "nothing set".

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// `ConfigStore` backed by one TOML file
pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    /// Store at `<config dir>/sound-cue/config.toml`
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("sound-cue");

        Self {
            path: config_dir.join("config.toml"),
        }
    }

    /// Store at an explicit file, used by tests
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Section and dotted-key forms both deserialize to the same settings
    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn to_toml(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

impl Default for TomlConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for TomlConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppConfig::empty()),
            Err(e) => return Err(ConfigError::ReadError(e.to_string())),
        };

        Self::parse_toml(&content)
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        // First save creates the sound-cue directory
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = Self::to_toml(config)?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.to_string_lossy().to_string(),
            ));
        }

        self.save(&AppConfig::defaults()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{AUDIO_NOTIFICATIONS_BREAKPOINT_HIT, AUDIO_NOTIFICATIONS_ENABLED};

    #[test]
    fn default_path_is_under_config_dir() {
        let store = TomlConfigStore::new();
        let path = store.path();
        assert!(path.to_string_lossy().contains("sound-cue"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn custom_path() {
        let store = TomlConfigStore::with_path("/custom/path/config.toml");
        assert_eq!(store.path(), PathBuf::from("/custom/path/config.toml"));
    }

    #[test]
    fn parse_toml_section_format() {
        let content = r#"
mediaDir = "/opt/sounds"

[audioNotifications]
enabled = true
breakpointHit = false
"#;

        let config = TomlConfigStore::parse_toml(content).unwrap();
        assert_eq!(config.media_dir, Some("/opt/sounds".to_string()));
        assert_eq!(config.get_bool(AUDIO_NOTIFICATIONS_ENABLED), Some(true));
        assert_eq!(config.get_bool(AUDIO_NOTIFICATIONS_BREAKPOINT_HIT), Some(false));
    }

    #[test]
    fn parse_toml_dotted_keys() {
        let content = "audioNotifications.enabled = true\n";

        let config = TomlConfigStore::parse_toml(content).unwrap();
        assert_eq!(config.get_bool(AUDIO_NOTIFICATIONS_ENABLED), Some(true));
        assert_eq!(config.get_bool(AUDIO_NOTIFICATIONS_BREAKPOINT_HIT), None);
    }

    #[test]
    fn parse_toml_rejects_wrong_type() {
        let content = "[audioNotifications]\nenabled = \"loud\"\n";
        assert!(matches!(
            TomlConfigStore::parse_toml(content),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlConfigStore::with_path(dir.path().join("config.toml"));

        assert!(!store.exists());
        assert_eq!(store.load().await.unwrap(), AppConfig::empty());
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlConfigStore::with_path(dir.path().join("nested/config.toml"));

        let mut config = AppConfig::empty();
        config.set_bool(AUDIO_NOTIFICATIONS_ENABLED, true);
        config.media_dir = Some("/opt/sounds".to_string());
        store.save(&config).await.unwrap();

        assert_eq!(store.load().await.unwrap(), config);
    }

    #[tokio::test]
    async fn init_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlConfigStore::with_path(dir.path().join("config.toml"));

        store.init().await.unwrap();
        assert_eq!(store.load().await.unwrap(), AppConfig::defaults());

        assert!(matches!(
            store.init().await,
            Err(ConfigError::AlreadyExists(_))
        ));
    }
}
