//! Web 服务器模块

use anyhow::{anyhow, Result};
use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{terabox, AppState};

/// 输入长度上限
const MAX_INPUT_LEN: usize = 2048;

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    pub url: String,
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<terabox::ResolvedFile>,
}

impl ResolveResponse {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            message,
            file: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: &'static str,
}

/// 校验 token；未配置 access_token 时放行
fn is_authorized(state: &AppState, token: &str) -> bool {
    state.config.web.access_token.is_empty() || state.config.web.access_token == token
}

/// 健康检查端点（不需要认证）
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION,
    })
}

/// 解析 API 端点
pub async fn resolve_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ResolveRequest>,
) -> Json<ResolveResponse> {
    if !is_authorized(&state, &req.token) {
        warn!("❌ 访问 token 错误");
        return Json(ResolveResponse::failure("访问 token 错误".to_string()));
    }

    if let Err(e) = validate_share_input(&req.url) {
        warn!("❌ 输入验证失败: {}", e);
        return Json(ResolveResponse::failure(format!("输入验证失败: {}", e)));
    }

    info!("📥 收到解析请求: {}", req.url.trim());

    match terabox::resolve(state.as_ref(), req.url.trim()).await {
        Ok(file) => {
            info!("✅ 解析成功: {}", file.filename);
            Json(ResolveResponse {
                success: true,
                message: "解析成功".to_string(),
                file: Some(file),
            })
        }
        Err(e) => {
            error!("❌ 解析失败: {}", e);
            Json(ResolveResponse::failure(e.to_string()))
        }
    }
}

/// 验证输入（链接或短码）
pub fn validate_share_input(input: &str) -> Result<()> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("分享链接不能为空"));
    }
    if input.len() > MAX_INPUT_LEN {
        return Err(anyhow!("分享链接过长（最多 {} 字符）", MAX_INPUT_LEN));
    }
    Ok(())
}

/// 创建 Web 路由
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/resolve", post(resolve_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn state_with_token(token: &str) -> AppState {
        let mut config = Config::default();
        config.web.access_token = token.to_string();
        AppState::new(config).unwrap()
    }

    #[test]
    fn test_validate_share_input_valid() {
        let valid_inputs = vec![
            "1AbC23dE",
            "https://www.terabox.com/s/1AbC23dE",
            "  https://terabox.example/sharing/link?shorturl=abc  ",
        ];

        for input in valid_inputs {
            assert!(
                validate_share_input(input).is_ok(),
                "Input should be valid: {}",
                input
            );
        }
    }

    #[test]
    fn test_validate_share_input_invalid() {
        let too_long = "a".repeat(MAX_INPUT_LEN + 1);
        let invalid_inputs = vec!["", "   ", too_long.as_str()];

        for input in invalid_inputs {
            assert!(
                validate_share_input(input).is_err(),
                "Input should be invalid: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_is_authorized() {
        let open = state_with_token("");
        assert!(is_authorized(&open, ""));
        assert!(is_authorized(&open, "anything"));

        let locked = state_with_token("secret");
        assert!(is_authorized(&locked, "secret"));
        assert!(!is_authorized(&locked, ""));
        assert!(!is_authorized(&locked, "wrong"));
    }

    #[tokio::test]
    async fn test_resolve_handler_rejects_bad_token() {
        let state = Arc::new(state_with_token("secret"));
        let Json(resp) = resolve_handler(
            State(state),
            Json(ResolveRequest {
                url: "1AbC23dE".to_string(),
                token: "wrong".to_string(),
            }),
        )
        .await;

        assert!(!resp.success);
        assert!(resp.file.is_none());
    }

    #[tokio::test]
    async fn test_resolve_handler_reports_invalid_identifier() {
        let state = Arc::new(state_with_token(""));
        let Json(resp) = resolve_handler(
            State(state),
            Json(ResolveRequest {
                url: "not a valid url".to_string(),
                token: String::new(),
            }),
        )
        .await;

        assert!(!resp.success);
        assert!(resp.message.contains("Invalid Terabox URL or short code."));
    }

    #[tokio::test]
    async fn test_resolve_handler_rejects_oversized_input() {
        let state = Arc::new(state_with_token(""));
        let Json(resp) = resolve_handler(
            State(state),
            Json(ResolveRequest {
                url: format!("https://www.terabox.com/s/{}", "a".repeat(MAX_INPUT_LEN)),
                token: String::new(),
            }),
        )
        .await;

        assert!(!resp.success);
        assert!(resp.message.starts_with("输入验证失败"));
    }

    #[tokio::test]
    async fn test_health_response() {
        let Json(response) = health_handler().await;
        assert_eq!(response.status, "ok");
        assert_eq!(response.version, crate::VERSION);
    }
}
