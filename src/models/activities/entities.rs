use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::enums::define_string_enum;
use crate::models::evaluations::entities::PrerequisiteLevel;

define_string_enum! {
    ActivityType, "activity.ts" {
        Exercice => "exercice",
        Tp => "tp",
        Quiz => "quiz",
        Projet => "projet",
    }
}

define_string_enum! {
    /// 活动难度
    Difficulty, "activity.ts" {
        Easy => "easy",
        Medium => "medium",
        Hard => "hard",
    }
}

impl Difficulty {
    /// 难度对应的学习阶段
    pub fn as_level(&self) -> PrerequisiteLevel {
        match self {
            Difficulty::Easy => PrerequisiteLevel::Beginner,
            Difficulty::Medium => PrerequisiteLevel::Intermediate,
            Difficulty::Hard => PrerequisiteLevel::Advanced,
        }
    }
}

define_string_enum! {
    ResourceType, "activity.ts" {
        Pdf => "pdf",
        Video => "video",
        Link => "link",
    }
}

/// 学习活动，隶属于某个能力
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "activity.ts")]
pub struct Activity {
    pub id: i64,
    pub competence_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub activity_type: ActivityType,
    /// 时长（分钟）
    pub duration: i32,
    pub level: Difficulty,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "activity.ts")]
pub struct ActivityResource {
    pub id: i64,
    pub activity_id: i64,
    pub title: String,
    pub resource_type: ResourceType,
    pub url: Option<String>,
    pub description: Option<String>,
}
