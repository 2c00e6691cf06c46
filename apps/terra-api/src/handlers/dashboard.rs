//! 仪表盘 handler
//!
//! GET /dashboard：固定统计数字 + 前 5 个项目 + 前 10 条生效告警 + 最近 10 条读数。

use crate::AppState;
use crate::utils::{alert_to_dto, json_ok, project_to_dto, sensor_reading_to_dto};
use api_contract::{DashboardResponse, DashboardStats};
use axum::{extract::State, response::Response};
use domain::stats;

const DASHBOARD_PROJECTS: usize = 5;
const DASHBOARD_ALERTS: usize = 10;
const DASHBOARD_READINGS: usize = 10;

/// GET /dashboard
pub async fn dashboard(State(state): State<AppState>) -> Response {
    let (projects, alerts, readings) = tokio::join!(
        state.project_store.get_projects(),
        state.alert_store.get_active_alerts(),
        state.sensor_store.get_recent_sensor_data(DASHBOARD_READINGS),
    );

    let stats = DashboardStats {
        species_monitored: stats::SPECIES_MONITORED,
        active_sensors: stats::ACTIVE_SENSORS,
        active_alerts: alerts.len() as u64,
        data_processed: stats::DATA_PROCESSED_TB_PER_HOUR,
        ecosystem_health: stats::ECOSYSTEM_HEALTH,
        forest_coverage: stats::FOREST_COVERAGE_HECTARES,
        trees_monitored: stats::TREES_MONITORED,
        ocean_coverage: stats::OCEAN_COVERAGE_KM2,
        marine_species: stats::MARINE_SPECIES,
        climate_models: stats::CLIMATE_MODELS,
        weather_stations: stats::WEATHER_STATIONS,
    };

    json_ok(DashboardResponse {
        stats,
        projects: projects
            .into_iter()
            .take(DASHBOARD_PROJECTS)
            .map(project_to_dto)
            .collect(),
        alerts: alerts
            .into_iter()
            .take(DASHBOARD_ALERTS)
            .map(alert_to_dto)
            .collect(),
        sensor_data: readings.into_iter().map(sensor_reading_to_dto).collect(),
    })
}
