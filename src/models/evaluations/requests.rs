use serde::Deserialize;
use ts_rs::TS;

use super::entities::PrerequisiteLevel;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "evaluation.ts")]
pub struct EvaluationRequest {
    pub title: String,
    pub prerequisite_level: PrerequisiteLevel,
    pub activity_id: i64,
    pub introduction: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "evaluation.ts")]
pub struct PublishRequest {
    pub published: bool,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "evaluation.ts")]
pub struct CreateQuestionRequest {
    pub label: String,
    #[serde(default)]
    pub options: Vec<Option<String>>,
    pub correct_answer: String,
}

/// 学生身份取自登录用户，请求体只携带自报水平
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "evaluation.ts")]
pub struct StartEvaluationRequest {
    pub student_level: Option<String>,
}
