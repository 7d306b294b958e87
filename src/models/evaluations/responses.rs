use serde::Serialize;
use ts_rs::TS;

use super::entities::{Evaluation, EvaluationStatus, PrerequisiteLevel, Question};

/// 列表项，附带题目数量
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "evaluation.ts")]
pub struct EvaluationSummary {
    pub id: i64,
    pub activity_id: i64,
    pub title: String,
    pub prerequisite_level: PrerequisiteLevel,
    pub introduction: Option<String>,
    pub status: EvaluationStatus,
    pub question_count: u64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl EvaluationSummary {
    pub fn new(evaluation: Evaluation, question_count: u64) -> Self {
        Self {
            id: evaluation.id,
            activity_id: evaluation.activity_id,
            title: evaluation.title,
            prerequisite_level: evaluation.prerequisite_level,
            introduction: evaluation.introduction,
            status: evaluation.status,
            question_count,
            created_at: evaluation.created_at,
            updated_at: evaluation.updated_at,
        }
    }
}

/// 学生视角的题目（不含正确答案）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "evaluation.ts")]
pub struct StudentQuestion {
    pub id: i64,
    pub label: String,
    pub options: Vec<String>,
    pub position: i32,
}

impl From<Question> for StudentQuestion {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            label: q.label,
            options: q.options,
            position: q.position,
        }
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "evaluation.ts")]
pub struct StartEvaluationResponse {
    pub submission_id: i64,
    pub evaluation_id: i64,
    pub title: String,
    pub introduction: Option<String>,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub questions: Vec<StudentQuestion>,
}
