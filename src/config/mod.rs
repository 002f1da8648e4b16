use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub mapping: MappingConfig,
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Path to the DOS-to-native mapping file, resolved against the
    /// working directory when relative
    #[serde(default = "default_mapping_file")]
    pub file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Shell program used to run translated command lines
    #[serde(default = "detect_default_shell")]
    pub program: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the "Executing: ..." line before running a command
    #[serde(default = "default_true")]
    pub show_translations: bool,

    /// Clear the screen between menu rounds
    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

// Default value functions
fn default_mapping_file() -> PathBuf {
    PathBuf::from("dos_linux_mapping.txt")
}

fn default_true() -> bool {
    true
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            file: default_mapping_file(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            program: detect_default_shell(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_translations: true,
            clear_screen: true,
        }
    }
}

impl Config {
    /// Load configuration from default location
    pub fn load_default() -> Result<Self> {
        let config_path = Self::default_config_path()?;

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents =
            fs::read_to_string(path.as_ref()).context("Failed to read config file")?;

        let config: Config =
            serde_yaml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_yaml::to_string(self).context("Failed to serialize config")?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(path.as_ref(), contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get default configuration path
    pub fn default_config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to get home directory")?;

        Ok(home.join(".doshell").join("config.yaml"))
    }
}

/// Detect the default shell for the current platform
fn detect_default_shell() -> String {
    if cfg!(windows) {
        "cmd".to_string()
    } else {
        "sh".to_string()
    }
}
