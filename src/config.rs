use anyhow::{Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::DEFAULT_OUTPUT_DIR;
use crate::tools::search::DEFAULT_TAVILY_BASE_URL;
use crate::tools::weather::DEFAULT_WEATHER_BASE_URL;

pub const DEFAULT_LLM_MODEL: &str = "Qwen/Qwen2.5-72B-Instruct";
pub const DEFAULT_LLM_BASE_URL: &str = "https://api-inference.modelscope.cn/v1";

const CONFIG_DIR_NAME: &str = "travel-planner";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub config_path: PathBuf,
    pub config_is_explicit: bool,
    pub llm_api_key: Option<String>,
    pub llm_model: String,
    pub llm_base_url: String,
    pub tavily_api_key: Option<String>,
    pub tavily_base_url: String,
    pub weather_base_url: String,
    pub output_dir: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFileConfig {
    llm_api_key: Option<String>,
    llm_model: Option<String>,
    llm_base_url: Option<String>,
    tavily_api_key: Option<String>,
    tavily_base_url: Option<String>,
    weather_base_url: Option<String>,
    output_dir: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_path(None)
    }

    /// Resolves settings from, in increasing priority: built-in defaults, the
    /// config file, `.env`, and the process environment.
    pub fn load_with_path(explicit_path: Option<&Path>) -> Result<Self> {
        let (config_path, config_is_explicit) = match explicit_path {
            Some(path) => (path.to_path_buf(), true),
            None => (discover_config_path()?, false),
        };
        if config_is_explicit && !config_path.is_file() {
            bail!(
                "Failed to load config {}: file does not exist",
                config_path.display()
            );
        }
        let file = load_file_config(&config_path)?.unwrap_or_default();

        dotenvy::dotenv().ok();

        let from_file = |value: &Option<String>| {
            value
                .as_deref()
                .and_then(non_empty)
                .map(ToOwned::to_owned)
        };

        Ok(Self {
            config_is_explicit,
            llm_api_key: env_non_empty("MODELSCOPE_API_KEY").or(from_file(&file.llm_api_key)),
            llm_model: env_non_empty("MODEL_NAME")
                .or(from_file(&file.llm_model))
                .unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            llm_base_url: env_non_empty("MODELSCOPE_BASE_URL")
                .or(from_file(&file.llm_base_url))
                .unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string()),
            tavily_api_key: env_non_empty("TAVILY_API_KEY").or(from_file(&file.tavily_api_key)),
            tavily_base_url: env_non_empty("TAVILY_BASE_URL")
                .or(from_file(&file.tavily_base_url))
                .unwrap_or_else(|| DEFAULT_TAVILY_BASE_URL.to_string()),
            weather_base_url: env_non_empty("WEATHER_BASE_URL")
                .or(from_file(&file.weather_base_url))
                .unwrap_or_else(|| DEFAULT_WEATHER_BASE_URL.to_string()),
            output_dir: PathBuf::from(
                env_non_empty("TRAVEL_OUTPUT_DIR")
                    .or(from_file(&file.output_dir))
                    .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
            ),
            config_path,
        })
    }
}

fn discover_config_path() -> Result<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let trimmed = xdg.trim();
        if trimmed.is_empty() {
            bail!("Failed to resolve config path: XDG_CONFIG_HOME is set but empty");
        }

        return Ok(PathBuf::from(trimmed)
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME));
    }

    let home = dirs::home_dir()
        .ok_or_else(|| anyhow!("Failed to resolve config path: HOME directory is unavailable"))?;

    Ok(home
        .join(".config")
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME))
}

fn load_file_config(config_path: &Path) -> Result<Option<RawFileConfig>> {
    if !config_path.is_file() {
        return Ok(None);
    }

    let config_text = fs::read_to_string(config_path).map_err(|err| {
        anyhow!(
            "Failed to load config {}: unable to read file: {err}",
            config_path.display()
        )
    })?;

    toml::from_str(&config_text)
        .map(Some)
        .map_err(|err| anyhow!("Failed to load config {}: {err}", config_path.display()))
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .and_then(|value| non_empty(&value).map(ToOwned::to_owned))
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
