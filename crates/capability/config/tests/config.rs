use terra_config::{AppConfig, ConfigError, DEFAULT_SEED_SENSOR_READINGS};

// 环境变量是进程级共享状态，因此在同一个测试里按顺序验证各种情况。
#[test]
fn load_config_from_env() {
    // Rust 2024 中 set_var 需要显式标注 unsafe（测试进程内可控）。
    unsafe {
        std::env::remove_var("TERRA_HTTP_ADDR");
        std::env::remove_var("TERRA_DEMO_SEED");
        std::env::remove_var("TERRA_SEED_SENSOR_READINGS");
    }
    let config = AppConfig::from_env().expect("defaults");
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.seed_sensor_readings, DEFAULT_SEED_SENSOR_READINGS);
    // 默认条数与存储层种子选项保持一致
    assert_eq!(
        config.seed_sensor_readings,
        terra_storage::SeedOptions::default().sensor_readings
    );

    unsafe {
        std::env::set_var("TERRA_HTTP_ADDR", "0.0.0.0:8081");
        std::env::set_var("TERRA_DEMO_SEED", "off");
        std::env::set_var("TERRA_SEED_SENSOR_READINGS", "250");
    }
    let config = AppConfig::from_env().expect("config");
    assert_eq!(config.http_addr, "0.0.0.0:8081");
    assert!(!config.demo_seed);
    assert_eq!(config.seed_sensor_readings, 250);

    unsafe {
        std::env::set_var("TERRA_SEED_SENSOR_READINGS", "lots");
    }
    let err = AppConfig::from_env().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid(ref key, ref value)
            if key == "TERRA_SEED_SENSOR_READINGS" && value == "lots"
    ));
}
