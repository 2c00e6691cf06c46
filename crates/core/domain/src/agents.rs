//! AI 代理目录（演示用静态数据）。

/// 单个 AI 代理的状态与指标。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentStatus {
    pub id: &'static str,
    pub name: &'static str,
    pub status: &'static str,
    /// 代理专属指标（camelCase 键名）。
    pub metrics: &'static [(&'static str, u64)],
}

/// 内置的六个 AI 代理。
pub const AGENTS: &[AgentStatus] = &[
    AgentStatus {
        id: "wildlife",
        name: "Wildlife AI",
        status: "active",
        metrics: &[
            ("activeCameras", 12_450),
            ("speciesDetected", 247_382),
            ("conservationAlerts", 23),
        ],
    },
    AgentStatus {
        id: "marine",
        name: "Marine AI",
        status: "active",
        metrics: &[
            ("oceanCoverage", 34_200_000),
            ("marineSpecies", 89_450),
            ("pollutionAlerts", 7),
        ],
    },
    AgentStatus {
        id: "climate",
        name: "Climate AI",
        status: "active",
        metrics: &[
            ("weatherStations", 45_678),
            ("climateModels", 127),
            ("riskAssessments", 12),
        ],
    },
    AgentStatus {
        id: "forest",
        name: "Forest AI",
        status: "active",
        metrics: &[
            ("forestCoverage", 892_000_000),
            ("treesMonitored", 15_200_000_000),
            ("deforestationAlerts", 156),
        ],
    },
    AgentStatus {
        id: "research",
        name: "Research AI",
        status: "active",
        metrics: &[
            ("researchPapers", 234_567),
            ("activeProjects", 1_234),
            ("collaborators", 8_901),
        ],
    },
    AgentStatus {
        id: "education",
        name: "Education AI",
        status: "active",
        metrics: &[
            ("studentsReached", 567_890),
            ("coursesAvailable", 156),
            ("certifications", 23_456),
        ],
    },
];

/// 研究门户中展示的协作者。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collaborator {
    pub name: &'static str,
    pub status: &'static str,
    pub activity: &'static str,
}

pub const COLLABORATORS: &[Collaborator] = &[
    Collaborator {
        name: "Dr. Sarah Chen",
        status: "online",
        activity: "Analyzing deforestation patterns",
    },
    Collaborator {
        name: "Dr. Marcus Johnson",
        status: "online",
        activity: "Marine biodiversity study",
    },
    Collaborator {
        name: "Dr. Alicia Patel",
        status: "offline",
        activity: "Climate model validation",
    },
];
