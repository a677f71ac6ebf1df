//! Settings domain module

mod app_config;
mod schema;

pub use app_config::{AppConfig, AudioNotificationsConfig};
pub use schema::{
    configuration_schema, ConfigurationProperty, ConfigurationSchema, DescriptionFormat,
    PropertyType, AUDIO_NOTIFICATIONS_BREAKPOINT_HIT, AUDIO_NOTIFICATIONS_ENABLED,
};
