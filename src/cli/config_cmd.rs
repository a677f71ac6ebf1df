//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{configuration_schema, AppConfig};
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, MEDIA_DIR_KEY, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    let mut config = store.load().await?;

    if key == MEDIA_DIR_KEY {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must not be empty".to_string(),
            });
        }
        config.media_dir = Some(value.to_string());
    } else {
        let flag = parse_bool(value).map_err(|_| ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must be 'true' or 'false'".to_string(),
        })?;
        config.set_bool(key, flag);
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    let config = store.load().await?;
    presenter.output(&display_value(&config, key));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, &display_value(&config, key));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn validate_key(key: &str) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }
    Ok(())
}

/// Stored value of a key, or a placeholder naming the default
fn display_value(config: &AppConfig, key: &str) -> String {
    if key == MEDIA_DIR_KEY {
        return config
            .media_dir
            .clone()
            .unwrap_or_else(|| "(not set)".to_string());
    }

    match (config.get_bool(key), configuration_schema().default_bool(key)) {
        (Some(value), _) => value.to_string(),
        (None, Some(default)) => format!("(not set, default: {})", default),
        (None, None) => "(not set)".to_string(),
    }
}

/// Parse a boolean value
pub fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}
