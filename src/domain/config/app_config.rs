//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::schema::{
    configuration_schema, AUDIO_NOTIFICATIONS_BREAKPOINT_HIT, AUDIO_NOTIFICATIONS_ENABLED,
};

/// The `audioNotifications` settings section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioNotificationsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoint_hit: Option<bool>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_notifications: Option<AudioNotificationsConfig>,
}

impl AppConfig {
    /// Create config with the schema defaults
    pub fn defaults() -> Self {
        let schema = configuration_schema();
        Self {
            media_dir: None,
            audio_notifications: Some(AudioNotificationsConfig {
                enabled: schema.default_bool(AUDIO_NOTIFICATIONS_ENABLED),
                breakpoint_hit: schema.default_bool(AUDIO_NOTIFICATIONS_BREAKPOINT_HIT),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            media_dir: other.media_dir.or(self.media_dir),
            audio_notifications: Self::merge_audio_notifications(
                self.audio_notifications,
                other.audio_notifications,
            ),
        }
    }

    fn merge_audio_notifications(
        base: Option<AudioNotificationsConfig>,
        other: Option<AudioNotificationsConfig>,
    ) -> Option<AudioNotificationsConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(AudioNotificationsConfig {
                enabled: o.enabled.or(b.enabled),
                breakpoint_hit: o.breakpoint_hit.or(b.breakpoint_hit),
            }),
        }
    }

    /// Read a boolean setting by its dotted key. `None` when unset or unknown.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        let section = self.audio_notifications.as_ref()?;
        match key {
            AUDIO_NOTIFICATIONS_ENABLED => section.enabled,
            AUDIO_NOTIFICATIONS_BREAKPOINT_HIT => section.breakpoint_hit,
            _ => None,
        }
    }

    /// Set a boolean setting by its dotted key. Returns false for unknown keys.
    pub fn set_bool(&mut self, key: &str, value: bool) -> bool {
        if configuration_schema().property(key).is_none() {
            return false;
        }
        let section = self.audio_notifications.get_or_insert_with(Default::default);
        match key {
            AUDIO_NOTIFICATIONS_ENABLED => section.enabled = Some(value),
            AUDIO_NOTIFICATIONS_BREAKPOINT_HIT => section.breakpoint_hit = Some(value),
            _ => return false,
        }
        true
    }

    /// Get the master switch, or the schema default if not set
    pub fn enabled_or_default(&self) -> bool {
        self.get_bool(AUDIO_NOTIFICATIONS_ENABLED)
            .or_else(|| configuration_schema().default_bool(AUDIO_NOTIFICATIONS_ENABLED))
            .unwrap_or(false)
    }

    /// Get the breakpoint-hit switch, or the schema default if not set
    pub fn breakpoint_hit_or_default(&self) -> bool {
        self.get_bool(AUDIO_NOTIFICATIONS_BREAKPOINT_HIT)
            .or_else(|| configuration_schema().default_bool(AUDIO_NOTIFICATIONS_BREAKPOINT_HIT))
            .unwrap_or(true)
    }

    /// Get the configured media directory, if any
    pub fn media_dir(&self) -> Option<PathBuf> {
        self.media_dir
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    }
}
