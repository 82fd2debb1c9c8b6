//! 分享信息接口（get-info-new）

use tracing::{debug, info, warn};

use super::error::TeraboxError;
use super::headers::get_headers;
use super::read_json;
use super::types::{has_files, response_ok, ShareInfoResponse};
use crate::AppState;

/// 获取分享信息，失败或文件列表为空时返回 MetadataFetchFailed
pub async fn get_share_info(
    state: &AppState,
    short_url: &str,
) -> Result<ShareInfoResponse, TeraboxError> {
    let origin = state.config.api_origin();
    let url = format!(
        "{}/api/get-info-new?shorturl={}",
        origin,
        urlencoding::encode(short_url)
    );

    info!("📥 获取分享信息: shorturl={}", short_url);
    debug!("📡 调用 info API: {}", url);

    let headers = get_headers(origin).map_err(|e| TeraboxError::Transport(e.to_string()))?;
    let resp = state.client.get(&url).headers(headers).send().await?;

    // 先判断 ok / list，再做强类型解析，失败响应的其它字段可能不规范
    let body: serde_json::Value = read_json(resp).await?;

    if !response_ok(&body) || !has_files(&body) {
        warn!(
            "⚠️ info API 返回失败: ok={}, list={}",
            body.get("ok").unwrap_or(&serde_json::Value::Null),
            body.get("list").map_or(false, |l| l.is_array())
        );
        return Err(TeraboxError::MetadataFetchFailed);
    }

    let info: ShareInfoResponse = serde_json::from_value(body)?;

    if info.list.len() > 1 {
        debug!("📋 分享包含 {} 个文件，只取第一个", info.list.len());
    }

    Ok(info)
}
