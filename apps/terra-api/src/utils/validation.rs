//! 输入验证辅助函数
//!
//! 校验规则：
//! - 必填字符串去除首尾空格后非空
//! - 枚举字段必须是已知的小写名称
//! - 同一请求的所有字段错误一并收集，一次返回
//! - `limit` 必须是非负整数
//! - 请求体不是合法 JSON（类型不符、缺少 Content-Type）同样按 400 返回

use crate::utils::response::{bad_request_error, invalid_payload};
use axum::{Json, extract::rejection::JsonRejection, response::Response};
use std::str::FromStr;

/// 字段错误收集器
#[derive(Debug, Default)]
pub struct FieldErrors {
    details: Vec<String>,
}

impl FieldErrors {
    /// 必填字段：去除空格并检查非空
    pub fn required(&mut self, value: Option<String>, field: &str) -> Option<String> {
        match value.as_deref().map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => Some(trimmed.to_string()),
            _ => {
                self.details.push(format!("{field} required"));
                None
            }
        }
    }

    /// 必填枚举字段：解析为领域枚举
    pub fn parsed<T: FromStr>(&mut self, value: Option<String>, field: &str) -> Option<T> {
        let raw = self.required(value, field)?;
        match raw.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                self.details.push(format!("{field} invalid: {raw}"));
                None
            }
        }
    }

    pub fn into_details(self) -> Vec<String> {
        self.details
    }
}

/// 解包 JSON 请求体；提取失败时返回 400 `message`，明细为 axum 的拒绝原因
pub fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    message: &str,
) -> Result<T, Response> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "request body rejected");
            Err(invalid_payload(message, vec![rejection.body_text()]))
        }
    }
}

/// 可选字段：去除空格，空字符串视为未提供
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// 解析 `limit` 查询参数，缺省时使用 `default`
pub fn parse_limit(value: Option<&str>, default: usize) -> Result<usize, Response> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| bad_request_error("Invalid limit")),
    }
}
