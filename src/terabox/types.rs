//! 数据类型

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 上游返回的标识字段（shareid / uk / sign / timestamp / fs_id）。
/// 可能是数字也可能是字符串，原样回传给下载接口。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ApiValue {
    Num(serde_json::Number),
    Str(String),
    Other(Value),
}

/// 响应体的 ok 字段是否为真（字段缺失视为失败）
pub fn response_ok(body: &Value) -> bool {
    body.get("ok").map_or(false, is_truthy)
}

/// 响应体的 list 是否为非空数组
pub fn has_files(body: &Value) -> bool {
    body.get("list")
        .and_then(Value::as_array)
        .map_or(false, |list| !list.is_empty())
}

/// get-info-new 响应
#[derive(Debug, Clone, Deserialize)]
pub struct ShareInfoResponse {
    #[serde(default, deserialize_with = "truthy")]
    pub ok: bool,
    #[serde(default)]
    pub shareid: Option<ApiValue>,
    #[serde(default)]
    pub uk: Option<ApiValue>,
    #[serde(default)]
    pub sign: Option<ApiValue>,
    #[serde(default)]
    pub timestamp: Option<ApiValue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: Vec<FileEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileEntry {
    #[serde(default)]
    pub fs_id: Option<ApiValue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub server_filename: String,
    #[serde(default, deserialize_with = "string_or_u64")]
    pub size: u64,
}

/// get-download 请求体，字段为空时不发送
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shareid: Option<ApiValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uk: Option<ApiValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<ApiValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<ApiValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_id: Option<ApiValue>,
}

impl DownloadPayload {
    pub fn new(info: &ShareInfoResponse, file: &FileEntry) -> Self {
        Self {
            shareid: info.shareid.clone(),
            uk: info.uk.clone(),
            sign: info.sign.clone(),
            timestamp: info.timestamp.clone(),
            fs_id: file.fs_id.clone(),
        }
    }
}

/// get-download 响应。直链字段名不固定，三个都要看
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadResponse {
    #[serde(default, deserialize_with = "truthy")]
    pub ok: bool,
    #[serde(default, rename = "downloadLink", deserialize_with = "string_only")]
    pub download_link: Option<String>,
    #[serde(default, deserialize_with = "string_only")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "string_only")]
    pub link: Option<String>,
}

impl DownloadResponse {
    /// 依次取 downloadLink → url → link 中第一个非空值
    pub fn direct_link(&self) -> Option<&str> {
        [&self.download_link, &self.url, &self.link]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .find(|v| !v.is_empty())
    }
}

/// 解析结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedFile {
    pub filename: String,
    pub size: u64,
    pub download_url: String,
}

/// 自定义反序列化：兼容 bool / 数字 / 字符串形式的 ok 字段
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(is_truthy(&Value::deserialize(deserializer)?))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// null 视为缺省值
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 直链字段只认字符串，其它类型当作不存在
fn string_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// 自定义反序列化：支持字符串或数字类型的 size
fn string_or_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrU64 {
        Str(String),
        Num(u64),
        Null,
    }

    match StringOrU64::deserialize(deserializer)? {
        StringOrU64::Str(s) => s.parse().map_err(Error::custom),
        StringOrU64::Num(n) => Ok(n),
        StringOrU64::Null => Ok(0),
    }
}
