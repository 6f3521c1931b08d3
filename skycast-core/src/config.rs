use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{env, fs, path::PathBuf};

/// Environment variable consulted before the config file.
pub const API_KEY_ENV: &str = "SKYCAST_API_KEY";

/// Startup configuration. The single recognized option is the
/// weatherapi.com API key; it is injected here, never baked into the code.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Resolve configuration at process start: `SKYCAST_API_KEY` wins,
    /// otherwise the TOML config file is read.
    pub fn load() -> Result<Self> {
        if let Ok(key) = env::var(API_KEY_ENV)
            && !key.trim().is_empty()
        {
            return Ok(Self { api_key: key });
        }

        let path = Self::config_file_path()?;
        if !path.exists() {
            return Err(anyhow!(
                "No API key configured.\n\
                 Hint: set {API_KEY_ENV}, or put `api_key = \"...\"` into {}.",
                path.display()
            ));
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse a TOML document of the form `api_key = "..."`.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_api_key_from_toml() {
        let cfg = Config::from_toml(r#"api_key = "SECRET""#).expect("valid config must parse");
        assert_eq!(cfg.api_key, "SECRET");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let cfg = Config::from_toml(
            r#"
            api_key = "SECRET"
            units = "metric"
            "#,
        )
        .expect("extra keys must not break parsing");
        assert_eq!(cfg.api_key, "SECRET");
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = Config::from_toml("").unwrap_err();
        assert!(err.to_string().contains("api_key"));
    }
}
