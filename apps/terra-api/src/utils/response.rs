//! HTTP 响应辅助函数和 DTO 转换
//!
//! 提供统一的响应构造函数和 DTO 转换函数：
//! - 成功响应：json_ok
//! - 错误响应：bad_request_error, invalid_payload, unauthorized_error, conflict_error, not_found_error
//! - DTO 转换：project_to_dto, alert_to_dto, sensor_reading_to_dto, user_to_dto, agent_to_dto, collaborator_to_dto
//!
//! handler 与 404 兜底返回的错误统一为 `{ "error": ..., "details"?: [...] }`，
//! 包括请求体无法解析为 JSON 的情况。

use api_contract::{
    AgentDto, AlertDto, CollaboratorDto, ErrorBody, LocationDto, ProjectDto, SensorReadingDto,
    UserDto,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{AgentStatus, Collaborator};
use serde::Serialize;
use terra_auth::UserProfile;
use terra_storage::{AlertRecord, ProjectRecord, SensorReadingRecord};

/// 200 JSON 响应
pub fn json_ok<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

fn error_response(status: StatusCode, body: ErrorBody) -> Response {
    (status, Json(body)).into_response()
}

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    error_response(StatusCode::BAD_REQUEST, ErrorBody::new(message))
}

/// 请求体校验失败，附带字段明细
pub fn invalid_payload(message: impl Into<String>, details: Vec<String>) -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        ErrorBody::with_details(message, details),
    )
}

/// 凭据无效
pub fn unauthorized_error(message: impl Into<String>) -> Response {
    error_response(StatusCode::UNAUTHORIZED, ErrorBody::new(message))
}

/// 资源冲突（用户名或邮箱已存在）
pub fn conflict_error(message: impl Into<String>) -> Response {
    error_response(StatusCode::CONFLICT, ErrorBody::new(message))
}

/// 资源未找到
pub fn not_found_error() -> Response {
    error_response(StatusCode::NOT_FOUND, ErrorBody::new("Not found"))
}

/// ProjectRecord 转 ProjectDto
pub fn project_to_dto(record: ProjectRecord) -> ProjectDto {
    ProjectDto {
        id: record.id,
        name: record.name,
        description: record.description,
        project_type: record.project_type.as_str().to_string(),
        status: record.status.as_str().to_string(),
        participants: record.participants,
        lead_researcher_id: record.lead_researcher_id,
        data: record.data,
        created_at: record.created_at,
    }
}

/// AlertRecord 转 AlertDto
pub fn alert_to_dto(record: AlertRecord) -> AlertDto {
    AlertDto {
        id: record.id,
        alert_type: record.alert_type.as_str().to_string(),
        severity: record.severity.as_str().to_string(),
        title: record.title,
        description: record.description,
        location: record.location,
        is_active: record.is_active,
        created_at: record.created_at,
    }
}

/// SensorReadingRecord 转 SensorReadingDto
pub fn sensor_reading_to_dto(record: SensorReadingRecord) -> SensorReadingDto {
    SensorReadingDto {
        id: record.id,
        sensor_id: record.sensor_id,
        sensor_type: record.sensor_type.as_str().to_string(),
        value: record.value,
        location: record.location.map(|point| LocationDto {
            lat: point.lat,
            lng: point.lng,
        }),
        timestamp: record.timestamp,
    }
}

/// UserProfile 转 UserDto
pub fn user_to_dto(profile: UserProfile) -> UserDto {
    UserDto {
        id: profile.id,
        username: profile.username,
        email: profile.email,
        role: profile.role.as_str().to_string(),
        institution: profile.institution,
        is_researcher: profile.is_researcher,
    }
}

/// AgentStatus 转 AgentDto
pub fn agent_to_dto(agent: &AgentStatus) -> AgentDto {
    let metrics = agent
        .metrics
        .iter()
        .map(|(key, value)| ((*key).to_string(), serde_json::Value::from(*value)))
        .collect();
    AgentDto {
        id: agent.id.to_string(),
        name: agent.name.to_string(),
        status: agent.status.to_string(),
        metrics,
    }
}

/// Collaborator 转 CollaboratorDto
pub fn collaborator_to_dto(collaborator: &Collaborator) -> CollaboratorDto {
    CollaboratorDto {
        name: collaborator.name.to_string(),
        status: collaborator.status.to_string(),
        activity: collaborator.activity.to_string(),
    }
}
