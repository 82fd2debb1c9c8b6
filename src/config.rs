//! 配置文件加载

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// 默认上游代理 API
pub const DEFAULT_API_BASE: &str = "https://terabox.hnn.workers.dev";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub terabox: TeraboxConfig,
    #[serde(default)] // 没有 [web] 就用默认值
    pub web: WebConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeraboxConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// 不设置或为 0 时使用 HTTP 客户端默认行为（无超时）
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebConfig {
    /// 为空表示 /api/resolve 不校验 token
    #[serde(default = "default_access_token")]
    pub access_token: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for TeraboxConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            http_timeout_secs: default_http_timeout_secs(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            access_token: default_access_token(),
            port: default_port(),
        }
    }
}

fn default_api_base() -> String {
    std::env::var("TERABOX_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

fn default_http_timeout_secs() -> Option<u64> {
    std::env::var("HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
}

fn default_access_token() -> String {
    // 优先使用环境变量
    std::env::var("WEB_ACCESS_TOKEN").unwrap_or_else(|_| "change-me".to_string())
}

fn default_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(5200)
}

impl Config {
    /// 加载配置；文件不存在时退回到默认值 + 环境变量
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| anyhow!("解析配置文件 {} 失败: {}", path, e))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// 上游 origin（去掉末尾的 `/`），用于 Origin / Referer 头和接口拼接
    pub fn api_origin(&self) -> &str {
        self.terabox.api_base.trim_end_matches('/')
    }

    /// 请求超时，0 视为不设置
    pub fn http_timeout(&self) -> Option<Duration> {
        self.terabox
            .http_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn browser_ua() -> &'static str {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/129.0.0.0 Safari/537.36"
    }
}
