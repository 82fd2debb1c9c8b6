//! 链接解析

use regex::Regex;
use std::sync::OnceLock;

/// 从分享链接中提取 shorturl，输入本身就是短码时原样返回
///
/// 支持：
/// - 1AbC23dE
/// - https://www.terabox.com/s/1AbC23dE
/// - https://www.terabox.com/sharing/link?surl=...&shorturl=1AbC23dE
pub fn extract_short_url(input: &str) -> Option<String> {
    static CODE_RE: OnceLock<Regex> = OnceLock::new();
    let code_re = CODE_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());
    if code_re.is_match(input) {
        return Some(input.to_string());
    }

    // 关键字不区分大小写，短码本身保持原样
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    let url_re =
        URL_RE.get_or_init(|| Regex::new(r"(?i)(?:/s/|shorturl=)([A-Za-z0-9_-]+)").unwrap());
    url_re
        .captures(input)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
