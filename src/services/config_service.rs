use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use serde::{Deserialize, Serialize};

use super::list_loader::DEFAULT_FAN_OUT;
use crate::models::RELATED_DISPLAY_COUNT;

pub const DEFAULT_API_BASE: &str = "https://bluelife.llc/api";
pub const API_BASE_ENV: &str = "BLUELIFE_API_BASE";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub fan_out: Option<usize>,
    #[serde(default)]
    pub related_display_count: Option<usize>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

/// Config with every default filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveConfig {
    pub api_base: String,
    pub fan_out: usize,
    pub related_display_count: usize,
    pub request_timeout: Option<Duration>,
}

impl EffectiveConfig {
    /// `env_api_base` wins over the file when set.
    pub fn resolve(config: &Config, env_api_base: Option<String>) -> Self {
        let api_base = env_api_base
            .filter(|s| !s.trim().is_empty())
            .or_else(|| config.api_base.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            fan_out: config.fan_out.filter(|n| *n > 0).unwrap_or(DEFAULT_FAN_OUT),
            related_display_count: config
                .related_display_count
                .unwrap_or(RELATED_DISPLAY_COUNT),
            request_timeout: config
                .request_timeout_secs
                .filter(|s| *s > 0)
                .map(Duration::from_secs),
        }
    }
}

pub fn get_app_data_dir() -> Result<PathBuf, String> {
    let data_dir = dirs::data_dir()
        .ok_or("Could not find data directory")?
        .join("BlueLife");

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir).map_err(|e| e.to_string())?;
    }

    Ok(data_dir)
}

fn get_config_path() -> Result<PathBuf, String> {
    Ok(get_app_data_dir()?.join("config.json"))
}

pub fn load_config() -> Result<Config, String> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)
        .map_err(|e| format!("Failed to read config: {}", e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse config: {}", e))
}

pub fn save_config(config: &Config) -> Result<(), String> {
    let config_path = get_config_path()?;
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    fs::write(&config_path, content)
        .map_err(|e| format!("Failed to write config: {}", e))?;
    Ok(())
}

pub fn get_api_base() -> Result<Option<String>, String> {
    let config = load_config()?;
    Ok(config.api_base)
}

pub fn set_api_base(url: &str) -> Result<(), String> {
    let url = validate_api_base(url)?;
    let mut config = load_config().unwrap_or_default();
    config.api_base = Some(url);
    save_config(&config)
}

pub fn set_fan_out(fan_out: usize) -> Result<(), String> {
    if fan_out == 0 {
        return Err("Fan-out must be at least 1".to_string());
    }
    let mut config = load_config().unwrap_or_default();
    config.fan_out = Some(fan_out);
    save_config(&config)
}

pub fn get_full_config() -> Result<Config, String> {
    load_config()
}

pub fn get_effective_config() -> Result<EffectiveConfig, String> {
    let config = load_config()?;
    Ok(EffectiveConfig::resolve(&config, std::env::var(API_BASE_ENV).ok()))
}

/// Only absolute http(s) URLs are accepted; a trailing slash is dropped.
pub fn validate_api_base(raw: &str) -> Result<String, String> {
    let parsed = url::Url::parse(raw.trim())
        .map_err(|e| format!("Invalid API base URL: {}", e))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("Unsupported URL scheme: {}", parsed.scheme()));
    }
    Ok(raw.trim().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_an_empty_config() {
        let effective = EffectiveConfig::resolve(&Config::default(), None);
        assert_eq!(effective.api_base, DEFAULT_API_BASE);
        assert_eq!(effective.fan_out, DEFAULT_FAN_OUT);
        assert_eq!(effective.related_display_count, 3);
        assert_eq!(effective.request_timeout, None);
    }

    #[test]
    fn env_overrides_file() {
        let config = Config {
            api_base: Some("https://staging.example.com/api".to_string()),
            fan_out: Some(0),
            request_timeout_secs: Some(15),
            ..Default::default()
        };

        let effective = EffectiveConfig::resolve(&config, Some("http://localhost:4000/api/".to_string()));
        assert_eq!(effective.api_base, "http://localhost:4000/api");
        assert_eq!(effective.fan_out, DEFAULT_FAN_OUT);
        assert_eq!(effective.request_timeout, Some(Duration::from_secs(15)));

        let effective = EffectiveConfig::resolve(&config, Some("  ".to_string()));
        assert_eq!(effective.api_base, "https://staging.example.com/api");
    }

    #[test]
    fn config_file_fields_are_optional() {
        let config: Config = serde_json::from_str(r#"{ "fan_out": 4 }"#).unwrap();
        assert_eq!(config.fan_out, Some(4));
        assert_eq!(config.api_base, None);
    }

    #[test]
    fn api_base_must_be_http() {
        assert_eq!(validate_api_base("https://bluelife.llc/api/").unwrap(), "https://bluelife.llc/api");
        assert!(validate_api_base("ftp://bluelife.llc").is_err());
        assert!(validate_api_base("not a url").is_err());
    }
}
