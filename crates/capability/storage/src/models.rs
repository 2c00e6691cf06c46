//! 数据模型
//!
//! 定义四类实体的存储记录与插入输入：
//! - 用户：UserRecord, NewUser
//! - 项目：ProjectRecord, NewProject
//! - 告警：AlertRecord, NewAlert
//! - 传感器读数：SensorReadingRecord, NewSensorReading
//!
//! 记录的 id 与时间戳由存储分配；输入结构只包含调用方可提供的字段。

use chrono::{DateTime, Utc};
use domain::{
    AlertSeverity, AlertType, GeoPoint, ProjectStatus, ProjectType, SensorType, UserRole,
};

/// 用户记录。
///
/// `password` 为不透明字符串，演示环境不做哈希。
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub institution: Option<String>,
    pub is_researcher: bool,
    pub created_at: DateTime<Utc>,
}

/// 用户创建输入。
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub institution: Option<String>,
}

/// 项目记录。
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub participants: u32,
    /// 松散引用 UserRecord.id，不做解引用校验。
    pub lead_researcher_id: Option<i64>,
    pub data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// 项目创建输入。
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub project_type: ProjectType,
    pub lead_researcher_id: Option<i64>,
}

/// 告警记录。
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRecord {
    pub id: i64,
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub title: String,
    pub description: String,
    pub location: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// 告警创建输入。
#[derive(Debug, Clone)]
pub struct NewAlert {
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub title: String,
    pub description: String,
    pub location: String,
}

/// 传感器读数记录。
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReadingRecord {
    pub id: i64,
    pub sensor_id: String,
    pub sensor_type: SensorType,
    /// 数值的字符串形式（如 "42.17"）。
    pub value: String,
    pub location: Option<GeoPoint>,
    pub timestamp: DateTime<Utc>,
}

/// 传感器读数写入输入。
#[derive(Debug, Clone)]
pub struct NewSensorReading {
    pub sensor_id: String,
    pub sensor_type: SensorType,
    pub value: String,
    pub location: Option<GeoPoint>,
    pub timestamp: DateTime<Utc>,
}
