use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::enums::define_string_enum;

define_string_enum! {
    /// 等级体系
    LevelType, "competence.ts" {
        Bloom => "bloom",
        Cefr => "cefr",
        Interne => "interne",
    }
}

define_string_enum! {
    /// 先修关系强度
    PrerequisiteType, "competence.ts" {
        Obligatoire => "obligatoire",
        Recommande => "recommande",
    }
}

/// 能力（技能树节点）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "competence.ts")]
pub struct Competence {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "competence.ts")]
pub struct SubCompetence {
    pub id: i64,
    pub competence_id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "competence.ts")]
pub struct Level {
    pub id: i64,
    pub competence_id: i64,
    pub level_type: LevelType,
    pub label: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "competence.ts")]
pub struct CompetenceResource {
    pub id: i64,
    pub competence_id: i64,
    pub title: String,
    pub url: Option<String>,
}

/// source 是 target 的先修能力
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "competence.ts")]
pub struct Prerequisite {
    pub id: i64,
    pub source_id: i64,
    pub target_id: i64,
    pub prerequisite_type: Option<PrerequisiteType>,
}
