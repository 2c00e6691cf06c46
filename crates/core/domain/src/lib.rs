//! 领域模型：实体枚举、坐标值对象与演示用静态目录。

pub mod agents;
pub mod entities;
pub mod stats;

pub use agents::{AGENTS, AgentStatus, COLLABORATORS, Collaborator};
pub use entities::{
    AlertSeverity, AlertType, GeoPoint, ProjectStatus, ProjectType, SensorType, UnknownVariant,
    UserRole,
};
