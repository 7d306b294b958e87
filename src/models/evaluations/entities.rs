use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::enums::define_string_enum;

define_string_enum! {
    /// 学习阶段，用于测评先修要求与推荐目标
    PrerequisiteLevel, "evaluation.ts" {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
}

define_string_enum! {
    EvaluationStatus, "evaluation.ts" {
        Draft => "draft",
        Published => "published",
    }
}

/// 测评（挂在某个学习活动下的小测）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "evaluation.ts")]
pub struct Evaluation {
    pub id: i64,
    pub activity_id: i64,
    pub title: String,
    pub prerequisite_level: PrerequisiteLevel,
    pub introduction: Option<String>,
    pub status: EvaluationStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Evaluation {
    pub fn is_published(&self) -> bool {
        self.status == EvaluationStatus::Published
    }
}

/// 单选题，correct_answer 必须是 options 之一
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "evaluation.ts")]
pub struct Question {
    pub id: i64,
    pub evaluation_id: i64,
    pub label: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub position: i32,
}
