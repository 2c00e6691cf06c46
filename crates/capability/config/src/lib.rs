//! 应用运行配置加载。

use std::env;

/// 默认种子读数条数（由存储层定义）。
pub use terra_storage::DEFAULT_SEED_SENSOR_READINGS;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 默认监听地址。
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:5000";

/// 应用运行配置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub http_addr: String,
    /// 为 false 时存储不写入种子数据。
    pub demo_seed: bool,
    pub seed_sensor_readings: usize,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr =
            env::var("TERRA_HTTP_ADDR").unwrap_or_else(|_| DEFAULT_HTTP_ADDR.to_string());
        if http_addr.trim().is_empty() {
            return Err(ConfigError::Missing("TERRA_HTTP_ADDR".to_string()));
        }
        let demo_seed = read_bool_with_default("TERRA_DEMO_SEED", true);
        let seed_sensor_readings =
            read_usize_with_default("TERRA_SEED_SENSOR_READINGS", DEFAULT_SEED_SENSOR_READINGS)?;

        Ok(Self {
            http_addr,
            demo_seed,
            seed_sensor_readings,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            demo_seed: true,
            seed_sensor_readings: DEFAULT_SEED_SENSOR_READINGS,
        }
    }
}

fn read_usize_with_default(key: &str, default: usize) -> Result<usize, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_bool_with_default(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "on"),
        Err(_) => default,
    }
}
