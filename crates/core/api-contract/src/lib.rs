//! 稳定的 DTO 与 API 响应契约。
//!
//! 字段统一使用 camelCase；枚举字段以小写字符串输出；
//! 时间字段为 RFC 3339 字符串。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 失败响应体。
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Vec::new(),
        }
    }

    pub fn with_details(error: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            error: error.into(),
            details,
        }
    }
}

// ============================================================================
// 实体 DTO
// ============================================================================

/// 用户公开资料（不含口令）。
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub institution: Option<String>,
    pub is_researcher: bool,
}

/// 项目返回结构。
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub status: String,
    pub participants: u32,
    pub lead_researcher_id: Option<i64>,
    pub data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// 告警返回结构。
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertDto {
    pub id: i64,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub severity: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// 坐标。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LocationDto {
    pub lat: f64,
    pub lng: f64,
}

/// 传感器读数返回结构。
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SensorReadingDto {
    pub id: i64,
    pub sensor_id: String,
    #[serde(rename = "type")]
    pub sensor_type: String,
    pub value: String,
    pub location: Option<LocationDto>,
    pub timestamp: DateTime<Utc>,
}

/// AI 代理状态；代理专属指标平铺在同一对象中。
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AgentDto {
    pub id: String,
    pub name: String,
    pub status: String,
    #[serde(flatten)]
    pub metrics: serde_json::Map<String, serde_json::Value>,
}

/// 研究协作者。
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CollaboratorDto {
    pub name: String,
    pub status: String,
    pub activity: String,
}

// ============================================================================
// 请求体与查询参数
// ============================================================================
//
// 字段都声明为 Option 并带默认值：缺失字段交给 handler 的校验逻辑
// 统一收集为错误明细，而不是在反序列化阶段直接失败。

/// 项目创建请求体。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
}

/// 告警创建请求体。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateAlertRequest {
    #[serde(rename = "type")]
    pub alert_type: Option<String>,
    pub severity: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// 登录请求体。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// 注册请求体。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub institution: Option<String>,
}

/// `GET /alerts` 查询参数。
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AlertsQuery {
    #[serde(rename = "type")]
    pub alert_type: Option<String>,
}

/// `GET /sensor-data` 查询参数。
///
/// `limit` 以字符串接收，便于返回统一的错误体。
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SensorDataQuery {
    #[serde(rename = "type")]
    pub sensor_type: Option<String>,
    pub limit: Option<String>,
}

// ============================================================================
// 响应体
// ============================================================================

/// 仪表盘统计数字。
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub species_monitored: u64,
    pub active_sensors: u64,
    pub active_alerts: u64,
    pub data_processed: f64,
    pub ecosystem_health: f64,
    pub forest_coverage: u64,
    pub trees_monitored: u64,
    pub ocean_coverage: u64,
    pub marine_species: u64,
    pub climate_models: u64,
    pub weather_stations: u64,
}

/// `GET /dashboard` 响应。
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub projects: Vec<ProjectDto>,
    pub alerts: Vec<AlertDto>,
    pub sensor_data: Vec<SensorReadingDto>,
}

/// 研究门户统计。
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchStats {
    pub active_projects: u64,
    pub researchers: u64,
    pub data_processed: u64,
}

/// `GET /research/dashboard` 响应。
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ResearchDashboardResponse {
    pub stats: ResearchStats,
    pub projects: Vec<ProjectDto>,
    pub collaborators: Vec<CollaboratorDto>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AgentsResponse {
    pub agents: Vec<AgentDto>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProjectsResponse {
    pub projects: Vec<ProjectDto>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProjectResponse {
    pub project: ProjectDto,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AlertsResponse {
    pub alerts: Vec<AlertDto>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AlertResponse {
    pub alert: AlertDto,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SensorDataResponse {
    pub data: Vec<SensorReadingDto>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub user: UserDto,
}
