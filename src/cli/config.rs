//! `lareqa config` command
//!
//! Get or set configuration values.
//!
//! # Usage
//! ```bash
//! lareqa config                             # Show all config
//! lareqa config server.port                 # Get specific value
//! lareqa config server.port 8080            # Set value
//! lareqa config languages.supported '["en", "pt"]'
//! lareqa config --path                      # Show config file locations
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use crate::config::{Config, LAREQA_DIR};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Config key (e.g., server.port, search.cli_top_k)
    pub key: Option<String>,

    /// Value to set
    pub value: Option<String>,

    /// List all config values
    #[arg(long)]
    pub list: bool,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Use global config (~/.lareqa/config.toml) instead of local
    #[arg(short, long)]
    pub global: bool,
}

fn get_config_path(global: bool) -> PathBuf {
    if global {
        return Config::global_config_path()
            .unwrap_or_else(|| PathBuf::from(LAREQA_DIR).join("config.toml"));
    }

    Config::find_lareqa_dir()
        .unwrap_or_else(|| PathBuf::from(LAREQA_DIR))
        .join("config.toml")
}

/// `explicit` is the global `--config` path; when set it is the file read and edited.
pub fn run(args: ConfigArgs, explicit: Option<&Path>) -> Result<()> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => get_config_path(args.global),
    };

    if args.path {
        println!("Global: {}", get_config_path(true).display());
        println!("Local:  {}", get_config_path(false).display());
        println!();
        if config_path.exists() {
            println!("✓ Active: {}", config_path.display());
        } else {
            println!("⚠ No config file found at {}", config_path.display());
        }
        return Ok(());
    }

    if args.list || (args.key.is_none() && args.value.is_none()) {
        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            println!("📋 Configuration ({}):\n", config_path.display());
            println!("{}", content);
        } else {
            println!("📋 No config file at {}, using defaults:\n", config_path.display());
            println!("{}", toml::to_string_pretty(&Config::default())?);
        }
        return Ok(());
    }

    if let Some(key) = &args.key {
        if let Some(value) = &args.value {
            set_config_value(&config_path, key, value)?;
            println!("✅ Set {} = {} (in {})", key, value, config_path.display());
        } else {
            match get_config_value(&config_path, key)? {
                Some(v) => println!("{}", v),
                None => println!("(not set)"),
            }
        }
    }

    Ok(())
}

/// Set a nested config value using dot notation (e.g., "server.port").
///
/// The file is only written when the result still parses as a [`Config`].
fn set_config_value(path: &Path, key: &str, val: &str) -> Result<()> {
    use toml_edit::{value, DocumentMut};

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let mut doc: DocumentMut = content.parse().context("Failed to parse config.toml")?;

    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        [top] => doc[*top] = value(parse_toml_value(val)),
        [section, field] => {
            if doc.get(section).is_none() {
                doc[*section] = toml_edit::table();
            }
            doc[*section][*field] = value(parse_toml_value(val));
        }
        _ => anyhow::bail!("Key too deep: {}. Max depth is section.key", key),
    }

    let edited = doc.to_string();
    toml::from_str::<Config>(&edited)
        .with_context(|| format!("Value for {} does not fit the config schema", key))?;

    fs::write(path, edited)?;
    Ok(())
}

/// Get a config value by dot notation key
fn get_config_value(path: &Path, key: &str) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let doc: toml::Table = content.parse().context("Failed to parse config.toml")?;

    let parts: Vec<&str> = key.split('.').collect();

    let val = match parts.as_slice() {
        [top] => doc.get(*top),
        [section, field] => doc.get(*section).and_then(|t| t.get(*field)),
        _ => None,
    };

    Ok(val.map(|v| match v {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }))
}

/// Parse string value to appropriate TOML type
fn parse_toml_value(s: &str) -> toml_edit::Value {
    if s.starts_with('[') {
        if let Ok(array) = s.parse::<toml_edit::Value>() {
            return array;
        }
    }

    if s == "true" {
        return toml_edit::Value::from(true);
    }
    if s == "false" {
        return toml_edit::Value::from(false);
    }

    if let Ok(i) = s.parse::<i64>() {
        return toml_edit::Value::from(i);
    }

    if let Ok(f) = s.parse::<f64>() {
        return toml_edit::Value::from(f);
    }

    toml_edit::Value::from(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_nested() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");

        set_config_value(&path, "server.port", "8080")?;
        set_config_value(&path, "server.host", "127.0.0.1")?;

        assert_eq!(get_config_value(&path, "server.port")?, Some("8080".to_string()));
        assert_eq!(
            get_config_value(&path, "server.host")?,
            Some("127.0.0.1".to_string())
        );

        let config = Config::load_from(&path)?;
        assert_eq!(config.server.port, 8080);
        Ok(())
    }

    #[test]
    fn test_set_array_value() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");

        set_config_value(&path, "languages.supported", r#"["en", "pt"]"#)?;
        let config = Config::load_from(&path)?;
        assert_eq!(config.languages.supported, vec!["en", "pt"]);
        Ok(())
    }

    #[test]
    fn test_key_too_deep() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        assert!(set_config_value(&path, "a.b.c", "1").is_err());
        Ok(())
    }

    #[test]
    fn test_invalid_value_leaves_file_untouched() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        Config::default().save_to(&path)?;
        let before = fs::read_to_string(&path)?;

        let err = set_config_value(&path, "server.port", "abc").unwrap_err();
        assert!(err.to_string().contains("server.port"));
        assert_eq!(fs::read_to_string(&path)?, before);
        assert_eq!(Config::load_from(&path)?.server.port, 5000);
        Ok(())
    }

    #[test]
    fn test_invalid_value_does_not_create_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        assert!(set_config_value(&path, "search.cli_top_k", "many").is_err());
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_run_edits_explicit_config() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("other.toml");
        let args = ConfigArgs {
            key: Some("server.port".to_string()),
            value: Some("8080".to_string()),
            list: false,
            path: false,
            global: false,
        };

        run(args, Some(&path))?;
        assert_eq!(Config::load_from(&path)?.server.port, 8080);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_unset() -> Result<()> {
        let dir = tempfile::tempdir()?;
        assert_eq!(get_config_value(&dir.path().join("none.toml"), "server.port")?, None);
        Ok(())
    }
}
