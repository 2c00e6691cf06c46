//! AI 代理状态 handler

use crate::utils::{agent_to_dto, json_ok};
use api_contract::AgentsResponse;
use axum::response::Response;
use domain::AGENTS;

/// GET /ai-agents
pub async fn list_agents() -> Response {
    json_ok(AgentsResponse {
        agents: AGENTS.iter().map(agent_to_dto).collect(),
    })
}
