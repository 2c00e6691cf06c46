//! 演示种子数据
//!
//! 每个存储实例构造时写入一次：
//! - 1 名研究员用户
//! - 4 个项目（负责人为该研究员）
//! - 4 条生效告警（过去 24 小时内）
//! - N 条传感器读数（过去 7 天内，默认 100 条）
//!
//! 读数的数值、坐标与时间偏移由读数序号的 v5 UUID 派生，
//! 同一序号每次得到相同结果；时间戳仍相对构造时刻。

use crate::in_memory::{
    InMemoryAlertStore, InMemoryProjectStore, InMemorySensorStore, InMemoryUserStore,
};
use crate::models::{NewAlert, NewProject, NewSensorReading, NewUser};
use chrono::{DateTime, Duration, Utc};
use domain::{AlertSeverity, AlertType, GeoPoint, ProjectType, SensorType, UserRole};
use uuid::Uuid;

/// 默认种子读数条数。
pub const DEFAULT_SEED_SENSOR_READINGS: usize = 100;

const SENSOR_WINDOW_MS: u32 = 7 * 24 * 60 * 60 * 1000;

/// 种子选项。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOptions {
    pub sensor_readings: usize,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            sensor_readings: DEFAULT_SEED_SENSOR_READINGS,
        }
    }
}

struct SampleProject {
    name: &'static str,
    description: &'static str,
    project_type: ProjectType,
    participants: u32,
}

const SAMPLE_PROJECTS: [SampleProject; 4] = [
    SampleProject {
        name: "Amazon Basin Analysis",
        description: "Real-time deforestation monitoring in the Amazon rainforest",
        project_type: ProjectType::Forest,
        participants: 12,
    },
    SampleProject {
        name: "Coral Reef Monitoring",
        description: "Great Barrier Reef health assessment using underwater sensors",
        project_type: ProjectType::Marine,
        participants: 8,
    },
    SampleProject {
        name: "Arctic Ice Tracking",
        description: "Climate change impact on polar ice sheets",
        project_type: ProjectType::Climate,
        participants: 15,
    },
    SampleProject {
        name: "Wildlife Migration",
        description: "Tracking migratory patterns of endangered species",
        project_type: ProjectType::Wildlife,
        participants: 20,
    },
];

struct SampleAlert {
    alert_type: AlertType,
    severity: AlertSeverity,
    title: &'static str,
    description: &'static str,
    location: &'static str,
    minutes_ago: i64,
}

const SAMPLE_ALERTS: [SampleAlert; 4] = [
    SampleAlert {
        alert_type: AlertType::Forest,
        severity: AlertSeverity::High,
        title: "Deforestation Alert",
        description: "Illegal logging detected in Amazon Basin",
        location: "Amazon, Brazil",
        minutes_ago: 180,
    },
    SampleAlert {
        alert_type: AlertType::Marine,
        severity: AlertSeverity::Medium,
        title: "Coral Bleaching",
        description: "Temperature anomaly causing coral stress",
        location: "Great Barrier Reef, Australia",
        minutes_ago: 540,
    },
    SampleAlert {
        alert_type: AlertType::Climate,
        severity: AlertSeverity::Critical,
        title: "Temperature Spike",
        description: "Record high temperatures in Arctic region",
        location: "Greenland",
        minutes_ago: 45,
    },
    SampleAlert {
        alert_type: AlertType::Wildlife,
        severity: AlertSeverity::High,
        title: "Migration Disruption",
        description: "Unusual migration patterns detected",
        location: "Serengeti, Tanzania",
        minutes_ago: 1_020,
    },
];

/// 写入研究员用户，返回其 id。
pub fn seed_users(store: &InMemoryUserStore, now: DateTime<Utc>) -> Option<i64> {
    let researcher = NewUser {
        username: "dr.sarah.chen".to_string(),
        email: "s.chen@conservation.org".to_string(),
        password: "hashed_password".to_string(),
        institution: Some("Stanford Marine Lab".to_string()),
    };
    match store.insert_with(researcher, UserRole::Researcher, true, now) {
        Ok(user) => Some(user.id),
        Err(err) => {
            tracing::warn!(error = %err, "sample researcher not seeded");
            None
        }
    }
}

/// 写入示例项目。
pub fn seed_projects(
    store: &InMemoryProjectStore,
    lead_researcher_id: Option<i64>,
    now: DateTime<Utc>,
) {
    for sample in &SAMPLE_PROJECTS {
        store.insert_with(
            NewProject {
                name: sample.name.to_string(),
                description: sample.description.to_string(),
                project_type: sample.project_type,
                lead_researcher_id,
            },
            sample.participants,
            now,
        );
    }
}

/// 写入示例告警。
pub fn seed_alerts(store: &InMemoryAlertStore, now: DateTime<Utc>) {
    for sample in &SAMPLE_ALERTS {
        store.insert_at(
            NewAlert {
                alert_type: sample.alert_type,
                severity: sample.severity,
                title: sample.title.to_string(),
                description: sample.description.to_string(),
                location: sample.location.to_string(),
            },
            now - Duration::minutes(sample.minutes_ago),
        );
    }
}

/// 写入 `count` 条示例读数。
pub fn seed_sensor_readings(store: &InMemorySensorStore, count: usize, now: DateTime<Utc>) {
    for index in 0..count {
        store.push(sample_reading(index, now));
    }
}

/// 第 `index` 条示例读数；类型在六种传感器间轮换。
pub fn sample_reading(index: usize, now: DateTime<Utc>) -> NewSensorReading {
    let key = Uuid::new_v5(&Uuid::NAMESPACE_OID, format!("terra-sensor-{index}").as_bytes());
    let bytes = key.as_bytes();
    let unit = |hi: u8, lo: u8| f64::from(u16::from_be_bytes([hi, lo])) / 65_536.0;
    let value = unit(bytes[0], bytes[1]) * 100.0;
    let lat = (unit(bytes[2], bytes[3]) - 0.5) * 180.0;
    let lng = (unit(bytes[4], bytes[5]) - 0.5) * 360.0;
    let offset_ms = u32::from_be_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]) % SENSOR_WINDOW_MS;
    let simple = key.simple().to_string();

    NewSensorReading {
        sensor_id: format!("SENSOR_{}", &simple[..9]),
        sensor_type: SensorType::ALL[index % SensorType::ALL.len()],
        value: format!("{value:.2}"),
        location: Some(GeoPoint::new(lat, lng)),
        timestamp: now - Duration::milliseconds(i64::from(offset_ms)),
    }
}
