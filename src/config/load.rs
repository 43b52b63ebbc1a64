use std::{env, path::PathBuf};

use super::schema::Settings;
use crate::error::{Error, Result};

impl Settings {
    /// Load settings from the optional config file and `APLAY__` environment variables.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("APLAY")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.audio.volume > 100 {
            return Err(Error::InvalidSetting(
                "audio.volume must be between 0 and 100".to_string(),
            ));
        }
        if self.audio.tick_ms == 0 {
            return Err(Error::InvalidSetting("audio.tick_ms must be >= 1".to_string()));
        }
        if self.ui.window_width <= 0.0 || self.ui.window_height <= 0.0 {
            return Err(Error::InvalidSetting(
                "ui.window_width and ui.window_height must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolve the config path from `APLAY_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("APLAY_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// `$XDG_CONFIG_HOME/aplay/config.toml`, or `~/.config/aplay/config.toml`
/// when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("aplay").join("config.toml"))
}
