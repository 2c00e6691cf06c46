//! 演示登录能力：按邮箱查找用户并返回公开资料。
//!
//! 不校验口令、不签发 token；仅用于演示站点的登录表单。

use chrono::{DateTime, Utc};
use domain::UserRole;
use std::sync::Arc;
use terra_storage::{NewUser, StorageError, UserRecord, UserStore};

/// 认证相关错误。
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("email and password are required")]
    MissingCredentials,
    #[error("invalid credentials")]
    InvalidCredentials,
    /// 用户名或邮箱已被占用。
    #[error("{0}")]
    AlreadyExists(String),
}

impl From<StorageError> for AuthError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Conflict { .. } => AuthError::AlreadyExists(err.to_string()),
        }
    }
}

/// 用户公开资料（不含口令）。
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub institution: Option<String>,
    pub is_researcher: bool,
    pub created_at: DateTime<Utc>,
}

impl From<UserRecord> for UserProfile {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            institution: user.institution,
            is_researcher: user.is_researcher,
            created_at: user.created_at,
        }
    }
}

/// 演示认证服务（基于 UserStore）。
pub struct AuthService {
    user_store: Arc<dyn UserStore>,
}

impl AuthService {
    /// 创建认证服务实例。
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }

    /// 按邮箱登录。
    ///
    /// 邮箱与口令均需非空；口令内容不做校验。
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        let user = self
            .user_store
            .get_user_by_email(email)
            .await
            .ok_or(AuthError::InvalidCredentials)?;
        tracing::info!(user_id = user.id, "demo login accepted");
        Ok(user.into())
    }

    /// 注册新用户（默认角色 user）。
    pub async fn register(&self, user: NewUser) -> Result<UserProfile, AuthError> {
        let created = self.user_store.create_user(user).await.map_err(|err| {
            tracing::warn!(error = %err, "registration rejected");
            AuthError::from(err)
        })?;
        Ok(created.into())
    }
}
