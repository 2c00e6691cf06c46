//! 存储接口 Trait 定义
//!
//! 定义四类集合的异步接口：
//! - UserStore：用户存储
//! - ProjectStore：项目存储
//! - AlertStore：告警存储
//! - SensorStore：传感器读数存储
//!
//! 设计原则：
//! - 读操作为全函数，"未找到" 以 `None` / 空列表表示
//! - 仅 `create_user` 可能失败（唯一性冲突）
//! - 使用 async_trait 支持动态分发

use crate::error::StorageError;
use crate::models::{
    AlertRecord, NewAlert, NewProject, NewSensorReading, NewUser, ProjectRecord,
    SensorReadingRecord, UserRecord,
};
use async_trait::async_trait;
use domain::{AlertType, ProjectType, SensorType};

/// `get_recent_sensor_data` 的默认条数。
pub const DEFAULT_RECENT_SENSOR_LIMIT: usize = 50;

/// `get_sensor_data_by_type` 的默认条数。
pub const DEFAULT_TYPED_SENSOR_LIMIT: usize = 20;

/// 用户存储接口
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 根据 id 查找用户
    async fn get_user(&self, id: i64) -> Option<UserRecord>;

    /// 根据用户名查找用户（按插入顺序取第一条）
    async fn get_user_by_username(&self, username: &str) -> Option<UserRecord>;

    /// 根据邮箱查找用户（按插入顺序取第一条）
    async fn get_user_by_email(&self, email: &str) -> Option<UserRecord>;

    /// 创建用户
    ///
    /// 默认角色 user、is_researcher = false；用户名或邮箱重复时返回 Conflict。
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, StorageError>;
}

/// 项目存储接口
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// 列出所有项目（插入顺序）
    async fn get_projects(&self) -> Vec<ProjectRecord>;

    /// 按类型过滤项目（插入顺序）
    async fn get_projects_by_type(&self, project_type: ProjectType) -> Vec<ProjectRecord>;

    /// 创建项目（状态 active，参与人数 0）
    async fn create_project(&self, project: NewProject) -> ProjectRecord;
}

/// 告警存储接口
///
/// 所有列表按 created_at 降序返回（最新在前）。
#[async_trait]
pub trait AlertStore: Send + Sync {
    /// 列出生效中的告警
    async fn get_active_alerts(&self) -> Vec<AlertRecord>;

    /// 列出指定类型且生效中的告警
    async fn get_alerts_by_type(&self, alert_type: AlertType) -> Vec<AlertRecord>;

    /// 创建告警（默认生效）
    async fn create_alert(&self, alert: NewAlert) -> AlertRecord;
}

/// 传感器读数存储接口
///
/// 所有列表按 timestamp 降序返回并截断到 `limit`。
#[async_trait]
pub trait SensorStore: Send + Sync {
    /// 最近的读数
    async fn get_recent_sensor_data(&self, limit: usize) -> Vec<SensorReadingRecord>;

    /// 指定类型的最近读数
    async fn get_sensor_data_by_type(
        &self,
        sensor_type: SensorType,
        limit: usize,
    ) -> Vec<SensorReadingRecord>;

    /// 追加读数（不按时间戳排序写入）
    async fn add_sensor_data(&self, reading: NewSensorReading) -> SensorReadingRecord;
}
