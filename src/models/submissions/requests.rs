use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct AnswerItem {
    pub question_id: i64,
    pub chosen_answer: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct SubmitRequest {
    #[serde(default)]
    pub answers: Vec<AnswerItem>,
}

/// 列表过滤，evaluation_id 优先于 student_id
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct SubmissionListParams {
    pub evaluation_id: Option<i64>,
    pub student_id: Option<i64>,
}
