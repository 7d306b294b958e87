use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 学情看板
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "analytics.ts")]
pub struct DashboardOverview {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    /// 有作答记录的不同学生数
    pub total_students: u64,
    /// 已注册的学生账号数
    pub registered_students: u64,
    pub total_evaluations: u64,
    pub published_evaluations: u64,
    pub total_activities: u64,
    pub total_submissions: u64,
    pub submitted_count: u64,
    pub in_progress_count: u64,
    pub at_risk_students_count: u64,
    pub score_distribution: Vec<ScoreBucket>,
    pub top_activities: Vec<TopActivity>,
    pub students_performance: Vec<StudentPerformance>,
}

/// 分数区间，上下界均包含
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "analytics.ts")]
pub struct ScoreBucket {
    pub range: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "analytics.ts")]
pub struct TopActivity {
    pub activity_id: i64,
    pub title: String,
    pub submissions_count: u64,
    pub avg_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "analytics.ts")]
pub struct StudentPerformance {
    pub student_id: i64,
    pub student_full_name: String,
    pub submissions_count: u64,
    pub avg_score: f64,
    pub last_score: Option<i32>,
    pub at_risk: bool,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "analytics.ts")]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub uptime_seconds: i64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
