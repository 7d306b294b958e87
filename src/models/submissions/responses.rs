use serde::Serialize;
use ts_rs::TS;

use super::entities::{Submission, SubmissionStatus};
use crate::models::evaluations::entities::PrerequisiteLevel;

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct SubmitResponse {
    pub submission_id: i64,
    pub score: i32,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub status: SubmissionStatus,
}

/// 作答列表行
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct SubmissionRow {
    pub submission_id: i64,
    pub evaluation_id: i64,
    pub evaluation_title: String,
    pub student_id: i64,
    pub student_full_name: String,
    pub student_level: Option<String>,
    pub activity_id: i64,
    pub prerequisite_level: PrerequisiteLevel,
    pub score: Option<i32>,
    pub status: SubmissionStatus,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl SubmissionRow {
    pub fn new(submission: Submission, evaluation_title: String) -> Self {
        Self {
            submission_id: submission.id,
            evaluation_id: submission.evaluation_id,
            evaluation_title,
            student_id: submission.student_id,
            student_full_name: submission.student_full_name,
            student_level: submission.student_level,
            activity_id: submission.activity_id,
            prerequisite_level: submission.prerequisite_level,
            score: submission.score,
            status: submission.status,
            started_at: submission.started_at,
            submitted_at: submission.submitted_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct AnswerDetail {
    pub question_id: i64,
    pub question_label: String,
    pub chosen_answer: String,
    /// 题目已删除时为空
    pub correct_answer: Option<String>,
    pub correct: bool,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct SubmissionDetail {
    #[serde(flatten)]
    pub row: SubmissionRow,
    pub answers: Vec<AnswerDetail>,
}
