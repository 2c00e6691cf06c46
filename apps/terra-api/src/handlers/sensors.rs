//! 传感器读数 handler
//!
//! GET /sensor-data?type=&limit=
//! - 指定 type：该类型最近的读数，默认 20 条
//! - 未指定：全部类型最近的读数，默认 50 条

use crate::AppState;
use crate::utils::{json_ok, parse_limit, sensor_reading_to_dto};
use api_contract::{SensorDataQuery, SensorDataResponse};
use axum::{
    extract::{Query, State},
    response::Response,
};
use domain::SensorType;
use terra_storage::{DEFAULT_RECENT_SENSOR_LIMIT, DEFAULT_TYPED_SENSOR_LIMIT};

/// 列出传感器读数
pub async fn list_sensor_data(
    State(state): State<AppState>,
    Query(query): Query<SensorDataQuery>,
) -> Response {
    let sensor_type = query.sensor_type.as_deref().filter(|value| !value.is_empty());
    let default_limit = if sensor_type.is_some() {
        DEFAULT_TYPED_SENSOR_LIMIT
    } else {
        DEFAULT_RECENT_SENSOR_LIMIT
    };
    let limit = match parse_limit(query.limit.as_deref(), default_limit) {
        Ok(limit) => limit,
        Err(response) => return response,
    };

    let data = match sensor_type {
        Some(raw) => match raw.parse::<SensorType>() {
            Ok(sensor_type) => {
                state
                    .sensor_store
                    .get_sensor_data_by_type(sensor_type, limit)
                    .await
            }
            Err(_) => Vec::new(),
        },
        None => state.sensor_store.get_recent_sensor_data(limit).await,
    };
    json_ok(SensorDataResponse {
        data: data.into_iter().map(sensor_reading_to_dto).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{body_json, seeded_state};
    use axum::http::StatusCode;

    fn query(sensor_type: Option<&str>, limit: Option<&str>) -> Query<SensorDataQuery> {
        Query(SensorDataQuery {
            sensor_type: sensor_type.map(str::to_string),
            limit: limit.map(str::to_string),
        })
    }

    async fn data_len(sensor_type: Option<&str>, limit: Option<&str>) -> usize {
        let body = body_json(list_sensor_data(State(seeded_state()), query(sensor_type, limit)).await).await;
        body["data"].as_array().map(Vec::len).unwrap_or_default()
    }

    #[tokio::test]
    async fn default_limits() {
        assert_eq!(data_len(None, None).await, 50);
        // 100 条种子读数在 6 种类型间轮换，temperature 有 17 条
        assert_eq!(data_len(Some("temperature"), None).await, 17);
        assert_eq!(data_len(Some("humidity"), Some("20")).await, 17);
    }

    #[tokio::test]
    async fn typed_limit_is_respected() {
        let body = body_json(
            list_sensor_data(State(seeded_state()), query(Some("temperature"), Some("5"))).await,
        )
        .await;
        let data = body["data"].as_array().expect("data");
        assert_eq!(data.len(), 5);
        assert!(data.iter().all(|reading| reading["type"] == "temperature"));
        assert!(data.iter().all(|reading| reading["location"]["lat"].is_number()));
    }

    #[tokio::test]
    async fn unknown_type_yields_empty_list() {
        assert_eq!(data_len(Some("radiation"), None).await, 0);
    }

    #[tokio::test]
    async fn invalid_limit_is_rejected() {
        let response = list_sensor_data(State(seeded_state()), query(None, Some("abc"))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid limit");
    }
}
