//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 健康检查：/health
//! - 仪表盘：/api/dashboard、/api/research/dashboard
//! - AI 代理：/api/ai-agents
//! - 项目：/api/projects
//! - 告警：/api/alerts
//! - 传感器读数：/api/sensor-data
//! - 演示认证：/api/auth/login、/api/auth/register

use super::AppState;
use super::handlers::*;
use crate::middleware::request_context;
use crate::utils::not_found_error;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// 创建 API 路由（挂载在 /api 下）
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/ai-agents", get(list_agents))
        .route("/projects", get(list_projects).post(create_project))
        .route("/alerts", get(list_alerts).post(create_alert))
        .route("/sensor-data", get(list_sensor_data))
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/research/dashboard", get(research_dashboard))
}

/// 组装完整应用：路由 + 状态 + 中间件
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", create_api_router())
        .fallback(|| async { not_found_error() })
        .with_state(state)
        // 注入 request_id/trace_id
        .layer(middleware::from_fn(request_context))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{body_json, seeded_state};
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use tower::ServiceExt;

    fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).expect("request")
    }

    #[tokio::test]
    async fn health_has_request_ids() {
        let app = build_app(seeded_state());
        let response = app.oneshot(get_request("/health")).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        assert!(response.headers().contains_key("x-trace-id"));
        assert_eq!(body_json(response).await, serde_json::json!({ "ok": true }));
    }

    #[tokio::test]
    async fn create_then_list_projects_through_router() {
        let app = build_app(seeded_state());
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/projects",
                serde_json::json!({ "name": "X", "description": "Y", "type": "wildlife" }),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get_request("/api/projects"))
            .await
            .expect("response");
        let body = body_json(response).await;
        let wildlife: Vec<_> = body["projects"]
            .as_array()
            .expect("projects")
            .iter()
            .filter(|project| project["type"] == "wildlife")
            .collect();
        assert_eq!(wildlife.len(), 2);
    }

    #[tokio::test]
    async fn sensor_query_parameters_are_applied() {
        let app = build_app(seeded_state());
        let response = app
            .oneshot(get_request("/api/sensor-data?type=co2&limit=3"))
            .await
            .expect("response");
        let body = body_json(response).await;
        let data = body["data"].as_array().expect("data");
        assert_eq!(data.len(), 3);
        assert!(data.iter().all(|reading| reading["type"] == "co2"));
    }

    #[tokio::test]
    async fn alerts_filter_through_router() {
        let app = build_app(seeded_state());
        let response = app
            .oneshot(get_request("/api/alerts?type=marine"))
            .await
            .expect("response");
        let body = body_json(response).await;
        assert_eq!(body["alerts"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["alerts"][0]["severity"], "medium");
    }

    #[tokio::test]
    async fn login_through_router() {
        let app = build_app(seeded_state());
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/auth/login",
                serde_json::json!({ "email": "s.chen@conservation.org", "password": "x" }),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["user"]["isResearcher"], true);
    }

    fn raw_post(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::from(body))
            .expect("request")
    }

    #[tokio::test]
    async fn wrong_typed_project_field_is_json_bad_request() {
        let state = seeded_state();
        let app = build_app(state.clone());
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/projects",
                serde_json::json!({ "name": 5, "description": "d", "type": "forest" }),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid project data");
        assert_eq!(body["details"].as_array().map(Vec::len), Some(1));
        assert_eq!(state.project_store.get_projects().await.len(), 4);
    }

    #[tokio::test]
    async fn alert_without_content_type_is_json_bad_request() {
        let app = build_app(seeded_state());
        let response = app
            .oneshot(raw_post(
                "/api/alerts",
                r#"{"type":"forest","severity":"low","title":"t","description":"d","location":"l"}"#,
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Invalid alert data");
    }

    #[tokio::test]
    async fn login_without_content_type_requires_credentials() {
        let app = build_app(seeded_state());
        let response = app
            .oneshot(raw_post(
                "/api/auth/login",
                r#"{"email":"s.chen@conservation.org","password":"x"}"#,
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "Email and password are required"
        );
    }

    #[tokio::test]
    async fn malformed_register_body_is_json_bad_request() {
        let app = build_app(seeded_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/auth/register")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{\"username\":"))
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Invalid user data");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = build_app(seeded_state());
        let response = app
            .oneshot(get_request("/api/unknown"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Not found");
    }
}
