//! 用户内存存储实现
//!
//! 功能：
//! - 按 id / 用户名 / 邮箱查找
//! - 创建用户，插入前校验用户名与邮箱唯一

use super::{Table, read, write};
use crate::error::StorageError;
use crate::models::{NewUser, UserRecord};
use crate::traits::UserStore;
use chrono::{DateTime, Utc};
use domain::UserRole;
use std::sync::RwLock;

/// 用户内存存储
pub struct InMemoryUserStore {
    users: RwLock<Table<UserRecord>>,
}

impl InMemoryUserStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Table::new()),
        }
    }

    /// 以指定角色与创建时间插入用户（种子数据和 `create_user` 共用）。
    pub fn insert_with(
        &self,
        user: NewUser,
        role: UserRole,
        is_researcher: bool,
        created_at: DateTime<Utc>,
    ) -> Result<UserRecord, StorageError> {
        let mut table = write(&self.users);
        if table.rows().iter().any(|row| row.username == user.username) {
            return Err(StorageError::conflict("username", user.username));
        }
        if table.rows().iter().any(|row| row.email == user.email) {
            return Err(StorageError::conflict("email", user.email));
        }
        let id = table.allocate_id();
        let record = table.push(UserRecord {
            id,
            username: user.username,
            email: user.email,
            password: user.password,
            role,
            institution: user.institution,
            is_researcher,
            created_at,
        });
        tracing::debug!(user_id = record.id, username = %record.username, "user created");
        Ok(record)
    }

    fn find(&self, predicate: impl Fn(&UserRecord) -> bool) -> Option<UserRecord> {
        read(&self.users).rows().iter().find(|row| predicate(row)).cloned()
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn get_user(&self, id: i64) -> Option<UserRecord> {
        self.find(|user| user.id == id)
    }

    async fn get_user_by_username(&self, username: &str) -> Option<UserRecord> {
        self.find(|user| user.username == username)
    }

    async fn get_user_by_email(&self, email: &str) -> Option<UserRecord> {
        self.find(|user| user.email == email)
    }

    async fn create_user(&self, user: NewUser) -> Result<UserRecord, StorageError> {
        self.insert_with(user, UserRole::default(), false, Utc::now())
    }
}
