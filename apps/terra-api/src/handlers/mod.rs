//! Handlers 模块

pub mod agents;
pub mod alerts;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod projects;
pub mod research;
pub mod sensors;

pub use agents::*;
pub use alerts::*;
pub use auth::*;
pub use dashboard::*;
pub use health::*;
pub use projects::*;
pub use research::*;
pub use sensors::*;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::AppState;
    use axum::response::Response;
    use http_body_util::BodyExt;
    use terra_storage::{MockStore, SeedOptions};

    /// 带默认种子数据的全新状态
    pub fn seeded_state() -> AppState {
        AppState::from_store(&MockStore::seeded(SeedOptions::default()))
    }

    /// 读取响应体为 JSON
    pub async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("json body")
    }
}
