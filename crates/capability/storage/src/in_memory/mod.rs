//! 内存存储实现模块
//!
//! 仅用于演示和测试，进程退出即丢失。
//!
//! 包含以下实现：
//! - UserStore: InMemoryUserStore
//! - ProjectStore: InMemoryProjectStore
//! - AlertStore: InMemoryAlertStore
//! - SensorStore: InMemorySensorStore
//!
//! 每个集合一把 `RwLock`，自增 id 与数据放在同一把锁内，
//! 保证 id 单调递增且与插入顺序一致。

pub mod alert;
pub mod project;
pub mod sensor;
pub mod user;

pub use alert::*;
pub use project::*;
pub use sensor::*;
pub use user::*;

use chrono::{DateTime, Utc};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// 带自增 id 的行集合（按插入顺序存放）。
#[derive(Debug)]
pub(crate) struct Table<T> {
    next_id: i64,
    rows: Vec<T>,
}

impl<T: Clone> Table<T> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }

    /// 分配下一个 id。
    pub(crate) fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// 追加一行并返回其副本。
    pub(crate) fn push(&mut self, row: T) -> T {
        self.rows.push(row.clone());
        row
    }

    pub(crate) fn rows(&self) -> &[T] {
        &self.rows
    }
}

/// 读锁；锁中毒时继续使用内部数据，读操作保持为全函数。
pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

/// 写锁；锁中毒时同样恢复。
pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// 按时间降序排序，时间相同时 id 大者（后插入）在前。
pub(crate) fn sort_newest_first<T>(rows: &mut [T], key: impl Fn(&T) -> (DateTime<Utc>, i64)) {
    rows.sort_by(|a, b| key(b).cmp(&key(a)));
}
