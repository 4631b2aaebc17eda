//! Configuration module

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::entry::default_supported_languages;

/// Name of the per-project directory
pub const LAREQA_DIR: &str = ".lareqa";

/// Data file inside `.lareqa/`
pub const DATA_FILE: &str = "knowledge_base.json";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub languages: LanguagesConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub remote: RemoteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Explicit knowledge base file (overrides `.lareqa/knowledge_base.json`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Default target of `save` in demo and interactive mode
    #[serde(default = "default_save_file")]
    pub default_save_file: PathBuf,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            default_save_file: default_save_file(),
        }
    }
}

fn default_save_file() -> PathBuf {
    PathBuf::from("lareqa_knowledge_base.json")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_cli_top_k")]
    pub cli_top_k: usize,

    #[serde(default = "default_web_top_k")]
    pub web_top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            cli_top_k: default_cli_top_k(),
            web_top_k: default_web_top_k(),
        }
    }
}

fn default_cli_top_k() -> usize {
    3
}

fn default_web_top_k() -> usize {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagesConfig {
    #[serde(default = "default_supported_languages")]
    pub supported: Vec<String>,
}

impl Default for LanguagesConfig {
    fn default() -> Self {
        Self {
            supported: default_supported_languages(),
        }
    }
}

/// Web interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// File rewritten after every successful `POST /add`
    #[serde(default = "default_server_save_file")]
    pub save_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            save_file: default_server_save_file(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_server_save_file() -> PathBuf {
    PathBuf::from("web_knowledge_base.json")
}

/// Remote server used by `--remote`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Server URL (e.g., "http://localhost:5000")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_remote_timeout")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: default_remote_timeout(),
        }
    }
}

fn default_remote_timeout() -> u64 {
    30
}

impl Config {
    /// Load config from default locations
    ///
    /// Priority: `LAREQA_CONFIG`, local `.lareqa/config.toml`, global `~/.lareqa/config.toml`.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var("LAREQA_CONFIG") {
            return Self::load_from(Path::new(&path));
        }

        if let Some(local) = Self::find_local_config() {
            return Self::load_from(&local);
        }

        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                return Self::load_from(&global);
            }
        }

        Ok(Self::default())
    }

    /// Load config from an explicit path, or the default locations
    pub fn load_with(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => Self::load(),
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Find `.lareqa/` walking up from the current directory
    pub fn find_lareqa_dir() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let dir = current.join(LAREQA_DIR);
            if dir.is_dir() {
                return Some(dir);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Find local .lareqa/config.toml walking up directories
    pub fn find_local_config() -> Option<PathBuf> {
        Self::find_lareqa_dir()
            .map(|d| d.join("config.toml"))
            .filter(|p| p.exists())
    }

    /// Global config path (~/.lareqa/config.toml)
    pub fn global_config_path() -> Option<PathBuf> {
        directories::UserDirs::new().map(|u| u.home_dir().join(LAREQA_DIR).join("config.toml"))
    }

    /// Knowledge base file, by priority:
    /// 1. LAREQA_DATA env var
    /// 2. `core.data_file`
    /// 3. `.lareqa/knowledge_base.json` in the nearest repository
    ///
    /// `None` means no persistent file: commands run on the sample data.
    pub fn data_file(&self) -> Option<PathBuf> {
        if let Ok(env_path) = std::env::var("LAREQA_DATA") {
            return Some(PathBuf::from(env_path));
        }

        if let Some(path) = &self.core.data_file {
            return Some(path.clone());
        }

        Self::find_lareqa_dir().map(|d| d.join(DATA_FILE))
    }
}
