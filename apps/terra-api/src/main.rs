//! 演示站点 HTTP API：仪表盘、AI 代理、项目、告警、传感器读数与演示登录。

mod handlers;
mod middleware;
mod routes;
mod utils;

use std::sync::Arc;
use terra_auth::AuthService;
use terra_config::AppConfig;
use terra_storage::{AlertStore, MockStore, ProjectStore, SeedOptions, SensorStore};
use terra_telemetry::init_tracing;

/// handler 共享状态；存储以 trait 对象注入。
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub project_store: Arc<dyn ProjectStore>,
    pub alert_store: Arc<dyn AlertStore>,
    pub sensor_store: Arc<dyn SensorStore>,
}

impl AppState {
    /// 由 MockStore 构造状态。
    pub fn from_store(store: &MockStore) -> Self {
        Self {
            auth: Arc::new(AuthService::new(store.users.clone())),
            project_store: store.projects.clone(),
            alert_store: store.alerts.clone(),
            sensor_store: store.sensors.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    // 内存存储：每次启动重新写入种子数据
    let store = if config.demo_seed {
        MockStore::seeded(SeedOptions {
            sensor_readings: config.seed_sensor_readings,
        })
    } else {
        MockStore::empty()
    };
    let app = routes::build_app(AppState::from_store(&store));

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    tracing::info!(addr = %config.http_addr, demo_seed = config.demo_seed, "terra-api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
