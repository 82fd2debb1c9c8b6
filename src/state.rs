//! 最小应用状态（配置 + 共享 HTTP client）

use anyhow::{anyhow, Result};
use reqwest::Client;
use url::Url;

use crate::config::Config;

pub struct AppState {
    pub config: Config,
    pub client: Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let base = config.api_origin().parse::<Url>().map_err(|e| {
            anyhow!(
                "api_base 不是合法的 URL: {} ({})",
                config.terabox.api_base,
                e
            )
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(anyhow!("api_base 必须是 http(s) 地址: {}", base));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.http_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }
}
