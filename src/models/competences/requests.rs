//! 创建与更新共用同一请求体（PUT 为整体替换）

use serde::Deserialize;
use ts_rs::TS;

use super::entities::{LevelType, PrerequisiteType};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "competence.ts")]
pub struct CompetenceRequest {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "competence.ts")]
pub struct SubCompetenceRequest {
    pub competence_id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "competence.ts")]
pub struct LevelRequest {
    pub competence_id: i64,
    pub level_type: LevelType,
    pub label: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "competence.ts")]
pub struct CompetenceResourceRequest {
    pub competence_id: i64,
    pub title: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "competence.ts")]
pub struct PrerequisiteRequest {
    pub source_id: i64,
    pub target_id: i64,
    pub prerequisite_type: Option<PrerequisiteType>,
}
