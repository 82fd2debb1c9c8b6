//! Terabox 分享链接解析模块

pub mod download;
pub mod error;
pub mod headers;
pub mod parser;
pub mod resolve;
pub mod share;
pub mod types;

use serde::de::DeserializeOwned;

// 导出常用函数
pub use download::get_download_link;
pub use error::{ResolveError, TeraboxError};
pub use headers::get_headers;
pub use parser::extract_short_url;
pub use resolve::resolve;
pub use share::get_share_info;
pub use types::{ApiValue, DownloadPayload, FileEntry, ResolvedFile};

/// 检查状态码并解析 JSON 响应体
async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, TeraboxError> {
    let status = resp.status();
    let text = resp.text().await?;

    tracing::debug!(
        "📨 响应 (status={}): {}",
        status,
        text.chars().take(300).collect::<String>()
    );

    if !status.is_success() {
        return Err(TeraboxError::Transport(format!(
            "Request failed with status code {}",
            status.as_u16()
        )));
    }

    Ok(serde_json::from_str(&text)?)
}
