//! 完整流程：短码 → 分享信息 → 下载直链

use tracing::info;

use super::download::get_download_link;
use super::error::{ResolveError, TeraboxError};
use super::parser::extract_short_url;
use super::share::get_share_info;
use super::types::{DownloadPayload, ResolvedFile};
use crate::AppState;

/// 解析分享链接或短码，返回文件名、大小和下载直链
///
/// 所有错误统一包装为 `Terabox API request failed: ...`
pub async fn resolve(state: &AppState, input: &str) -> Result<ResolvedFile, ResolveError> {
    Ok(resolve_inner(state, input).await?)
}

async fn resolve_inner(state: &AppState, input: &str) -> Result<ResolvedFile, TeraboxError> {
    let short_url = extract_short_url(input).ok_or(TeraboxError::InvalidIdentifier)?;

    let info = get_share_info(state, &short_url).await?;
    let file = info
        .list
        .first()
        .ok_or(TeraboxError::MetadataFetchFailed)?;

    let payload = DownloadPayload::new(&info, file);
    let download_url = get_download_link(state, &payload).await?;

    info!("✅ {} ({} 字节)", file.server_filename, file.size);

    Ok(ResolvedFile {
        filename: file.server_filename.clone(),
        size: file.size,
        download_url,
    })
}
