//! 研究门户 handler
//!
//! GET /research/dashboard：生效项目统计 + 前 5 个生效项目 + 协作者列表。

use crate::AppState;
use crate::utils::{collaborator_to_dto, json_ok, project_to_dto};
use api_contract::{ResearchDashboardResponse, ResearchStats};
use axum::{extract::State, response::Response};
use domain::{COLLABORATORS, ProjectStatus, stats};

const RESEARCH_PROJECTS: usize = 5;

/// GET /research/dashboard
pub async fn research_dashboard(State(state): State<AppState>) -> Response {
    let active: Vec<_> = state
        .project_store
        .get_projects()
        .await
        .into_iter()
        .filter(|project| project.status == ProjectStatus::Active)
        .collect();

    json_ok(ResearchDashboardResponse {
        stats: ResearchStats {
            active_projects: active.len() as u64,
            researchers: stats::RESEARCHERS,
            data_processed: stats::RESEARCH_DATA_PROCESSED_TB,
        },
        projects: active
            .into_iter()
            .take(RESEARCH_PROJECTS)
            .map(project_to_dto)
            .collect(),
        collaborators: COLLABORATORS.iter().map(collaborator_to_dto).collect(),
    })
}
