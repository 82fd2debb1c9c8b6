//! 下载直链接口（get-download）

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use tracing::{debug, warn};

use super::error::TeraboxError;
use super::headers::get_headers;
use super::read_json;
use super::types::{response_ok, DownloadPayload, DownloadResponse};
use crate::AppState;

/// 用分享信息换取下载直链
pub async fn get_download_link(
    state: &AppState,
    payload: &DownloadPayload,
) -> Result<String, TeraboxError> {
    let origin = state.config.api_origin();
    let url = format!("{}/api/get-download", origin);

    debug!("📡 调用 download API: {}", url);

    let mut headers = get_headers(origin).map_err(|e| TeraboxError::Transport(e.to_string()))?;
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let resp = state
        .client
        .post(&url)
        .headers(headers)
        .json(payload)
        .send()
        .await?;

    let body: serde_json::Value = read_json(resp).await?;

    if !response_ok(&body) {
        warn!("⚠️ download API 返回 ok=false");
        return Err(TeraboxError::DownloadLinkFetchFailed);
    }

    let data: DownloadResponse = serde_json::from_value(body)?;

    // ok=true 但三个字段都为空，同样视为失败
    data.direct_link()
        .map(str::to_string)
        .ok_or(TeraboxError::DownloadLinkFetchFailed)
}
