//! 组合根持有的存储实例
//!
//! `MockStore` 打包四个内存存储。由 `main` 构造后注入 handler 状态；
//! 测试各自构造，互不共享状态。

use crate::in_memory::{
    InMemoryAlertStore, InMemoryProjectStore, InMemorySensorStore, InMemoryUserStore,
};
use crate::seed::{self, SeedOptions};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// 四个集合的内存存储。
#[derive(Clone)]
pub struct MockStore {
    pub users: Arc<InMemoryUserStore>,
    pub projects: Arc<InMemoryProjectStore>,
    pub alerts: Arc<InMemoryAlertStore>,
    pub sensors: Arc<InMemorySensorStore>,
}

impl MockStore {
    /// 不含任何数据的存储。
    pub fn empty() -> Self {
        Self {
            users: Arc::new(InMemoryUserStore::new()),
            projects: Arc::new(InMemoryProjectStore::new()),
            alerts: Arc::new(InMemoryAlertStore::new()),
            sensors: Arc::new(InMemorySensorStore::new()),
        }
    }

    /// 以当前时间写入种子数据。
    pub fn seeded(options: SeedOptions) -> Self {
        Self::seeded_at(options, Utc::now())
    }

    /// 以指定时间写入种子数据。
    pub fn seeded_at(options: SeedOptions, now: DateTime<Utc>) -> Self {
        let store = Self::empty();
        let lead_researcher_id = seed::seed_users(&store.users, now);
        seed::seed_projects(&store.projects, lead_researcher_id, now);
        seed::seed_alerts(&store.alerts, now);
        seed::seed_sensor_readings(&store.sensors, options.sensor_readings, now);
        tracing::info!(
            sensor_readings = options.sensor_readings,
            "mock store seeded"
        );
        store
    }
}
