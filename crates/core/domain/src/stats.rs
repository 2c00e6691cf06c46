//! 仪表盘固定统计数字。

/// 监测物种数。
pub const SPECIES_MONITORED: u64 = 247_382;
/// 在线传感器数。
pub const ACTIVE_SENSORS: u64 = 45_678;
/// 每小时处理数据量（TB）。
pub const DATA_PROCESSED_TB_PER_HOUR: f64 = 1.2;
pub const ECOSYSTEM_HEALTH: f64 = 98.7;
/// 森林覆盖（公顷）。
pub const FOREST_COVERAGE_HECTARES: u64 = 892_000_000;
pub const TREES_MONITORED: u64 = 15_200_000_000;
/// 海洋覆盖（平方公里）。
pub const OCEAN_COVERAGE_KM2: u64 = 34_200_000;
pub const MARINE_SPECIES: u64 = 89_450;
pub const CLIMATE_MODELS: u64 = 127;
pub const WEATHER_STATIONS: u64 = 45_678;

/// 研究门户：研究人员数。
pub const RESEARCHERS: u64 = 8_901;
/// 研究门户：累计处理数据量（TB）。
pub const RESEARCH_DATA_PROCESSED_TB: u64 = 456;
