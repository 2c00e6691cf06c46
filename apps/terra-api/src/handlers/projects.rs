//! 项目 handlers
//!
//! - GET /projects - 列出项目（插入顺序）
//! - POST /projects - 创建项目（name、description、type 必填）

use crate::AppState;
use crate::utils::{FieldErrors, invalid_payload, json_body, json_ok, project_to_dto};
use api_contract::{CreateProjectRequest, ProjectResponse, ProjectsResponse};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};
use domain::ProjectType;
use terra_storage::NewProject;

const INVALID_PROJECT: &str = "Invalid project data";

/// 列出项目
pub async fn list_projects(State(state): State<AppState>) -> Response {
    let projects = state.project_store.get_projects().await;
    json_ok(ProjectsResponse {
        projects: projects.into_iter().map(project_to_dto).collect(),
    })
}

/// 创建项目
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> Response {
    let req = match json_body(payload, INVALID_PROJECT) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let mut errors = FieldErrors::default();
    let name = errors.required(req.name, "name");
    let description = errors.required(req.description, "description");
    let project_type = errors.parsed::<ProjectType>(req.project_type, "type");

    let (Some(name), Some(description), Some(project_type)) = (name, description, project_type)
    else {
        tracing::warn!(details = ?errors, "project rejected");
        return invalid_payload(INVALID_PROJECT, errors.into_details());
    };

    let project = state
        .project_store
        .create_project(NewProject {
            name,
            description,
            project_type,
            lead_researcher_id: None,
        })
        .await;
    json_ok(ProjectResponse {
        project: project_to_dto(project),
    })
}
