//! Terabox 分享链接 → 下载直链

pub mod config;
pub mod state;
pub mod terabox;
pub mod web;

pub use config::Config;
pub use state::AppState;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
