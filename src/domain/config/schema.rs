//! Configuration schema declared by the notification sound player
//!
//! The host merges this table into its own settings registry at startup.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Master switch for all notification sounds
pub const AUDIO_NOTIFICATIONS_ENABLED: &str = "audioNotifications.enabled";

/// Switch for the breakpoint-hit sound, consulted only when the master switch is on
pub const AUDIO_NOTIFICATIONS_BREAKPOINT_HIT: &str = "audioNotifications.breakpointHit";

/// Value type of a configuration property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Boolean,
}

/// How the host should render a property description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionFormat {
    Plain,
    Markdown,
}

/// A single property of the configuration schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationProperty {
    pub key: &'static str,
    pub property_type: PropertyType,
    pub default: bool,
    pub description: &'static str,
    pub description_format: DescriptionFormat,
}

/// Ordered set of properties contributed to the host settings registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationSchema {
    properties: &'static [ConfigurationProperty],
}

static PROPERTIES: [ConfigurationProperty; 2] = [
    ConfigurationProperty {
        key: AUDIO_NOTIFICATIONS_ENABLED,
        property_type: PropertyType::Boolean,
        default: false,
        description: "Controls whether audio cues are enabled.",
        description_format: DescriptionFormat::Plain,
    },
    ConfigurationProperty {
        key: AUDIO_NOTIFICATIONS_BREAKPOINT_HIT,
        property_type: PropertyType::Boolean,
        default: true,
        description: "Controls whether an audio cue should be played when a breakpoint is hit.",
        description_format: DescriptionFormat::Markdown,
    },
];

/// Get the configuration schema of the notification sound player
pub fn configuration_schema() -> ConfigurationSchema {
    ConfigurationSchema {
        properties: &PROPERTIES,
    }
}

impl ConfigurationSchema {
    /// All properties in declaration order
    pub fn properties(&self) -> &'static [ConfigurationProperty] {
        self.properties
    }

    /// Look up a property by key
    pub fn property(&self, key: &str) -> Option<&'static ConfigurationProperty> {
        self.properties.iter().find(|p| p.key == key)
    }

    /// Default value of a boolean property
    pub fn default_bool(&self, key: &str) -> Option<bool> {
        self.property(key)
            .filter(|p| p.property_type == PropertyType::Boolean)
            .map(|p| p.default)
    }
}

// Serialized in the host's registry shape, keeping declaration order:
// {"properties": {"<key>": {"type": .., "default": .., "description": ..}}}
impl Serialize for ConfigurationSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Properties(&'static [ConfigurationProperty]);

        impl Serialize for Properties {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for property in self.0 {
                    map.serialize_entry(property.key, property)?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("properties", &Properties(self.properties))?;
        map.end()
    }
}

impl Serialize for ConfigurationProperty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let description_key = match self.description_format {
            DescriptionFormat::Plain => "description",
            DescriptionFormat::Markdown => "markdownDescription",
        };

        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", &self.property_type)?;
        map.serialize_entry(description_key, self.description)?;
        map.serialize_entry("default", &self.default)?;
        map.end()
    }
}
