//! 告警内存存储实现
//!
//! 列表只返回生效中的告警，按 created_at 降序。

use super::{Table, read, sort_newest_first, write};
use crate::models::{AlertRecord, NewAlert};
use crate::traits::AlertStore;
use chrono::{DateTime, Utc};
use domain::AlertType;
use std::sync::RwLock;

/// 告警内存存储
pub struct InMemoryAlertStore {
    alerts: RwLock<Table<AlertRecord>>,
}

impl InMemoryAlertStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self {
            alerts: RwLock::new(Table::new()),
        }
    }

    /// 以指定创建时间插入告警。
    pub fn insert_at(&self, alert: NewAlert, created_at: DateTime<Utc>) -> AlertRecord {
        let mut table = write(&self.alerts);
        let id = table.allocate_id();
        let record = table.push(AlertRecord {
            id,
            alert_type: alert.alert_type,
            severity: alert.severity,
            title: alert.title,
            description: alert.description,
            location: alert.location,
            is_active: true,
            created_at,
        });
        tracing::debug!(
            alert_id = record.id,
            alert_type = %record.alert_type,
            severity = %record.severity,
            "alert created"
        );
        record
    }

    fn active_where(&self, predicate: impl Fn(&AlertRecord) -> bool) -> Vec<AlertRecord> {
        let mut alerts: Vec<AlertRecord> = read(&self.alerts)
            .rows()
            .iter()
            .filter(|alert| alert.is_active && predicate(alert))
            .cloned()
            .collect();
        sort_newest_first(&mut alerts, |alert| (alert.created_at, alert.id));
        alerts
    }
}

impl Default for InMemoryAlertStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AlertStore for InMemoryAlertStore {
    async fn get_active_alerts(&self) -> Vec<AlertRecord> {
        self.active_where(|_| true)
    }

    async fn get_alerts_by_type(&self, alert_type: AlertType) -> Vec<AlertRecord> {
        self.active_where(|alert| alert.alert_type == alert_type)
    }

    async fn create_alert(&self, alert: NewAlert) -> AlertRecord {
        self.insert_at(alert, Utc::now())
    }
}
