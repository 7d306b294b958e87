use serde::Serialize;
use ts_rs::TS;

use crate::models::evaluations::entities::PrerequisiteLevel;

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "recommendation.ts")]
pub struct RecommendationResponse {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub student_id: i64,
    pub strategy: String,
    pub student_avg_score: f64,
    pub target_level: PrerequisiteLevel,
    pub recommendations: Vec<RecommendationItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "recommendation.ts")]
pub struct RecommendationItem {
    pub activity_id: i64,
    pub title: String,
    /// 活动所属能力
    pub skill_id: Option<i64>,
    pub level: PrerequisiteLevel,
    pub priority_score: f64,
    pub reason: String,
}
