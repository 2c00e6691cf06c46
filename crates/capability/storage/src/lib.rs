//! # Terra Storage 模块
//!
//! 演示站点的内存数据存储：用户、项目、告警、传感器读数四个集合，
//! 构造时写入固定种子数据，进程退出即丢失。
//!
//! ## 模块说明
//!
//! - [`models`]：记录与插入输入
//! - [`traits`]：每个集合一个异步存储接口
//! - [`error`]：存储错误（仅用户唯一性冲突）
//! - [`in_memory`]：`RwLock` 保护的内存实现
//! - [`seed`]：种子数据
//! - [`mock`]：打包四个存储的 `MockStore`
//!
//! ## 排序约定
//!
//! - 项目：插入顺序
//! - 告警：created_at 降序
//! - 传感器读数：timestamp 降序
//!
//! 时间相同时 id 大者在前。
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use terra_storage::{AlertStore, MockStore, SeedOptions};
//!
//! let store = MockStore::seeded(SeedOptions::default());
//! let alerts = store.alerts.get_active_alerts().await;
//! assert_eq!(alerts.len(), 4);
//! ```

pub mod error;
pub mod in_memory;
pub mod mock;
pub mod models;
pub mod seed;
pub mod traits;

pub use error::*;
pub use mock::MockStore;
pub use models::*;
pub use seed::{DEFAULT_SEED_SENSOR_READINGS, SeedOptions};
pub use traits::*;

pub use in_memory::{
    InMemoryAlertStore, InMemoryProjectStore, InMemorySensorStore, InMemoryUserStore,
};
