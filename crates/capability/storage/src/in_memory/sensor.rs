//! 传感器读数内存存储实现
//!
//! 读数按到达顺序追加；排序只发生在读取时，且作用于副本。

use super::{Table, read, sort_newest_first, write};
use crate::models::{NewSensorReading, SensorReadingRecord};
use crate::traits::SensorStore;
use domain::SensorType;
use std::sync::RwLock;

/// 传感器读数内存存储
pub struct InMemorySensorStore {
    readings: RwLock<Table<SensorReadingRecord>>,
}

impl InMemorySensorStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self {
            readings: RwLock::new(Table::new()),
        }
    }

    /// 追加读数。
    pub fn push(&self, reading: NewSensorReading) -> SensorReadingRecord {
        let mut table = write(&self.readings);
        let id = table.allocate_id();
        table.push(SensorReadingRecord {
            id,
            sensor_id: reading.sensor_id,
            sensor_type: reading.sensor_type,
            value: reading.value,
            location: reading.location,
            timestamp: reading.timestamp,
        })
    }

    /// 当前读数总数（用于测试）
    pub fn len(&self) -> usize {
        read(&self.readings).rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn newest_where(
        &self,
        limit: usize,
        predicate: impl Fn(&SensorReadingRecord) -> bool,
    ) -> Vec<SensorReadingRecord> {
        let mut readings: Vec<SensorReadingRecord> = read(&self.readings)
            .rows()
            .iter()
            .filter(|reading| predicate(reading))
            .cloned()
            .collect();
        sort_newest_first(&mut readings, |reading| (reading.timestamp, reading.id));
        readings.truncate(limit);
        readings
    }
}

impl Default for InMemorySensorStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SensorStore for InMemorySensorStore {
    async fn get_recent_sensor_data(&self, limit: usize) -> Vec<SensorReadingRecord> {
        self.newest_where(limit, |_| true)
    }

    async fn get_sensor_data_by_type(
        &self,
        sensor_type: SensorType,
        limit: usize,
    ) -> Vec<SensorReadingRecord> {
        self.newest_where(limit, |reading| reading.sensor_type == sensor_type)
    }

    async fn add_sensor_data(&self, reading: NewSensorReading) -> SensorReadingRecord {
        let record = self.push(reading);
        tracing::debug!(
            reading_id = record.id,
            sensor_id = %record.sensor_id,
            sensor_type = %record.sensor_type,
            "sensor reading added"
        );
        record
    }
}
