//! 项目内存存储实现
//!
//! 功能：
//! - 列出项目（插入顺序）
//! - 按类型过滤
//! - 创建项目

use super::{Table, read, write};
use crate::models::{NewProject, ProjectRecord};
use crate::traits::ProjectStore;
use chrono::{DateTime, Utc};
use domain::{ProjectStatus, ProjectType};
use std::sync::RwLock;

/// 项目内存存储
pub struct InMemoryProjectStore {
    projects: RwLock<Table<ProjectRecord>>,
}

impl InMemoryProjectStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(Table::new()),
        }
    }

    /// 以指定参与人数与创建时间插入项目。
    pub fn insert_with(
        &self,
        project: NewProject,
        participants: u32,
        created_at: DateTime<Utc>,
    ) -> ProjectRecord {
        let mut table = write(&self.projects);
        let id = table.allocate_id();
        let record = table.push(ProjectRecord {
            id,
            name: project.name,
            description: project.description,
            project_type: project.project_type,
            status: ProjectStatus::default(),
            participants,
            lead_researcher_id: project.lead_researcher_id,
            data: None,
            created_at,
        });
        tracing::debug!(project_id = record.id, project_type = %record.project_type, "project created");
        record
    }
}

impl Default for InMemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn get_projects(&self) -> Vec<ProjectRecord> {
        read(&self.projects).rows().to_vec()
    }

    async fn get_projects_by_type(&self, project_type: ProjectType) -> Vec<ProjectRecord> {
        read(&self.projects)
            .rows()
            .iter()
            .filter(|project| project.project_type == project_type)
            .cloned()
            .collect()
    }

    async fn create_project(&self, project: NewProject) -> ProjectRecord {
        self.insert_with(project, 0, Utc::now())
    }
}
