use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::enums::define_string_enum;
use crate::models::evaluations::entities::PrerequisiteLevel;

define_string_enum! {
    SubmissionStatus, "submission.ts" {
        InProgress => "in_progress",
        Submitted => "submitted",
    }
}

/// 学生的一次测评作答
///
/// activity_id 与 prerequisite_level 在开始作答时从测评复制，之后不随测评修改而变化。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct Submission {
    pub id: i64,
    pub evaluation_id: i64,
    pub activity_id: i64,
    pub prerequisite_level: PrerequisiteLevel,
    pub student_id: i64,
    pub student_full_name: String,
    pub student_level: Option<String>,
    /// 0..=100，提交前为空
    pub score: Option<i32>,
    pub status: SubmissionStatus,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Submission {
    pub fn is_submitted(&self) -> bool {
        self.status == SubmissionStatus::Submitted
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct StudentAnswer {
    pub id: i64,
    pub submission_id: i64,
    pub question_id: i64,
    pub chosen_answer: String,
    pub correct: bool,
}

/// 新建作答记录的参数
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub evaluation_id: i64,
    pub activity_id: i64,
    pub prerequisite_level: PrerequisiteLevel,
    pub student_id: i64,
    pub student_full_name: String,
    pub student_level: Option<String>,
}

/// 保存判分结果的结果
#[derive(Debug, Clone)]
pub enum SaveOutcome {
    Saved(Submission),
    /// 作答已是 submitted，未做任何修改
    AlreadySubmitted,
    NotFound,
}

/// 已判分的答案
#[derive(Debug, Clone, PartialEq)]
pub struct GradedAnswer {
    pub question_id: i64,
    pub chosen_answer: String,
    pub correct: bool,
}
