use anyhow::{bail, Context};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "PROF_SOUNDS_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub settings_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_quiet_flag")]
    pub quiet_flag: String,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        if let Some(path) = Self::env_path() {
            return Self::load_from_path(&path);
        }

        let local = Self::project_path();
        if local.exists() {
            return Self::load_from_path(&local);
        }

        if let Ok(path) = Self::default_path() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }

        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config at {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("parse config at {}", path.display()))?;
        Ok(config)
    }

    pub fn init_default() -> anyhow::Result<PathBuf> {
        let path = match Self::env_path() {
            Some(path) => path,
            None => Self::default_path()?,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config = Self::default();
        fs::write(&path, serde_json::to_string_pretty(&config)?)?;
        Ok(path)
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        let base = BaseDirs::new().context("unable to resolve home directory")?;
        Ok(base.config_dir().join("prof-sounds").join("config.json"))
    }

    pub fn settings_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = &self.settings_path {
            return Ok(path.clone());
        }
        let base = BaseDirs::new().context("unable to resolve home directory")?;
        Ok(base.config_dir().join("prof-sounds").join("settings.json"))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.player.program.trim().is_empty() {
            bail!("player.program must not be empty");
        }

        if let Some(path) = &self.settings_path {
            if path.is_dir() {
                bail!("settings_path is a directory: {}", path.display());
            }
        }

        Ok(())
    }

    fn env_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    fn project_path() -> PathBuf {
        PathBuf::from("prof-sounds.json")
    }
}

fn default_program() -> String {
    "mplayer".to_string()
}

fn default_quiet_flag() -> String {
    "-really-quiet".to_string()
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            quiet_flag: default_quiet_flag(),
        }
    }
}
