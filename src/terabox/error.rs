//! 错误类型

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeraboxError {
    #[error("Invalid Terabox URL or short code.")]
    InvalidIdentifier,
    #[error("Failed to retrieve file info from Terabox.")]
    MetadataFetchFailed,
    #[error("Failed to get download URL from Terabox.")]
    DownloadLinkFetchFailed,
    /// 网络错误 / 非 2xx / JSON 解析失败，保留原始信息
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for TeraboxError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for TeraboxError {
    fn from(e: serde_json::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

/// resolve 对外统一的错误形态
#[derive(Error, Debug)]
#[error("Terabox API request failed: {source}")]
pub struct ResolveError {
    #[from]
    source: TeraboxError,
}

impl ResolveError {
    pub fn kind(&self) -> &TeraboxError {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_error_message_prefix() {
        let err = ResolveError::from(TeraboxError::InvalidIdentifier);
        assert_eq!(
            err.to_string(),
            "Terabox API request failed: Invalid Terabox URL or short code."
        );
        assert!(matches!(err.kind(), TeraboxError::InvalidIdentifier));
    }

    #[test]
    fn test_transport_keeps_cause() {
        let err = ResolveError::from(TeraboxError::Transport(
            "Request failed with status code 502".into(),
        ));
        assert_eq!(
            err.to_string(),
            "Terabox API request failed: Request failed with status code 502"
        );
    }
}
