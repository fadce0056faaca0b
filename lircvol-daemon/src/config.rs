//! Configuration management

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Daemon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Path to configuration file
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Path to the lircd control socket
    pub lirc_socket: String,

    /// Fractional volume change per key press, in `[0.0, 1.0]`
    pub volume_step: f32,

    /// ALSA card to open
    pub mixer_card: String,

    /// Simple mixer control to drive
    pub mixer_control: String,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            config_path: Self::default_config_path(),
            lirc_socket: "/var/run/lirc/lircd".to_string(),
            volume_step: 0.05,
            mixer_card: "default".to_string(),
            mixer_control: "Master".to_string(),
        }
    }
}

impl DaemonConfig {
    /// Load configuration from the default location, or create it
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_config_path())
    }

    /// Load configuration from `config_path`, writing defaults if absent
    pub fn load_from(config_path: PathBuf) -> Result<Self> {
        let config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .context("Failed to read config file")?;

            let mut config: DaemonConfig = toml::from_str(&contents)
                .context("Failed to parse config file")?;

            config.config_path = config_path;
            config
        } else {
            let mut config = Self::default();
            config.config_path = config_path;
            config.save().context("Failed to save default config")?;
            config
        };

        ensure!(
            (0.0..=1.0).contains(&config.volume_step),
            "volume_step must be within [0.0, 1.0], got {}",
            config.volume_step
        );

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(&self.config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lircvol")
            .join("config.toml")
    }
}
