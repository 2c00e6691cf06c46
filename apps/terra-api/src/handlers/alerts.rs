//! 告警 handlers
//!
//! - GET /alerts?type= - 生效中的告警（最新在前），可按类型过滤
//! - POST /alerts - 创建告警

use crate::AppState;
use crate::utils::{FieldErrors, alert_to_dto, invalid_payload, json_body, json_ok};
use api_contract::{AlertResponse, AlertsQuery, AlertsResponse, CreateAlertRequest};
use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    response::Response,
};
use domain::{AlertSeverity, AlertType};
use terra_storage::NewAlert;

const INVALID_ALERT: &str = "Invalid alert data";

/// 列出告警
///
/// 未知类型返回空列表。
pub async fn list_alerts(State(state): State<AppState>, Query(query): Query<AlertsQuery>) -> Response {
    let alerts = match query.alert_type.as_deref().filter(|value| !value.is_empty()) {
        Some(raw) => match raw.parse::<AlertType>() {
            Ok(alert_type) => state.alert_store.get_alerts_by_type(alert_type).await,
            Err(_) => Vec::new(),
        },
        None => state.alert_store.get_active_alerts().await,
    };
    json_ok(AlertsResponse {
        alerts: alerts.into_iter().map(alert_to_dto).collect(),
    })
}

/// 创建告警
pub async fn create_alert(
    State(state): State<AppState>,
    payload: Result<Json<CreateAlertRequest>, JsonRejection>,
) -> Response {
    let req = match json_body(payload, INVALID_ALERT) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let mut errors = FieldErrors::default();
    let alert_type = errors.parsed::<AlertType>(req.alert_type, "type");
    let severity = errors.parsed::<AlertSeverity>(req.severity, "severity");
    let title = errors.required(req.title, "title");
    let description = errors.required(req.description, "description");
    let location = errors.required(req.location, "location");

    let (Some(alert_type), Some(severity), Some(title), Some(description), Some(location)) =
        (alert_type, severity, title, description, location)
    else {
        tracing::warn!(details = ?errors, "alert rejected");
        return invalid_payload(INVALID_ALERT, errors.into_details());
    };

    let alert = state
        .alert_store
        .create_alert(NewAlert {
            alert_type,
            severity,
            title,
            description,
            location,
        })
        .await;
    json_ok(AlertResponse {
        alert: alert_to_dto(alert),
    })
}
