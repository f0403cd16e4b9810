//! 配置服务
//!
//! 配置文件：`<config dir>/hotel-clients/config.toml`
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//! timeout_secs = 10
//!
//! [ui]
//! language = "es-MX"
//! theme = "dark"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use hotel_clients_api::{ClientConfig, DEFAULT_BASE_URL};
use serde::Deserialize;
use thiserror::Error;

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "HOTEL_CLIENTS_CONFIG";

/// 覆盖 `api.base_url` 的环境变量
pub const BASE_URL_ENV: &str = "HOTEL_CLIENTS_BASE_URL";

/// 默认请求超时（秒）
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiSection,
    pub ui: UiSection,
}

/// `[api]` 段
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiSection {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout(),
        }
    }
}

/// `[ui]` 段
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub language: String,
    pub theme: String,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            theme: "dark".to_string(),
        }
    }
}

impl UiSection {
    /// 未知语言代码回落到默认语言
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }

    pub fn theme(&self) -> Theme {
        match self.theme.to_ascii_lowercase().as_str() {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认配置路径
    pub fn new() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hotel-clients")
            .join("config.toml");
        Self { path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let mut config = if self.path.exists() {
            let content = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
                path: self.path.clone(),
                source,
            })?;
            parse_config(&content).map_err(|source| ConfigError::Parse {
                path: self.path.clone(),
                source,
            })?
        } else {
            log::info!("No config file at {}, using defaults", self.path.display());
            AppConfig::default()
        };

        apply_env_overrides(&mut config, std::env::var(BASE_URL_ENV).ok());
        Ok(config)
    }
}

fn parse_config(content: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(content)
}

/// 环境变量优先于配置文件
fn apply_env_overrides(config: &mut AppConfig, base_url: Option<String>) {
    if let Some(base_url) = base_url.filter(|url| !url.trim().is_empty()) {
        log::info!("{BASE_URL_ENV} overrides api.base_url");
        config.api.base_url = base_url;
    }
}
