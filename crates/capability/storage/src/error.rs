//! 存储层错误类型
//!
//! 读操作是全函数（返回 `Option`/`Vec`），不会产生错误；
//! 目前唯一的失败路径是用户唯一性冲突。

/// 存储错误。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// 唯一字段（username / email）已被占用。
    #[error("{field} already taken: {value}")]
    Conflict { field: &'static str, value: String },
}

impl StorageError {
    pub fn conflict(field: &'static str, value: impl Into<String>) -> Self {
        Self::Conflict {
            field,
            value: value.into(),
        }
    }
}
