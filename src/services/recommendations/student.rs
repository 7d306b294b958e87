use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;

use super::RecommendationService;
use super::engine::{STRATEGY, recommend, round2, target_level};
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::activities::entities::Activity;
use crate::models::recommendations::{
    requests::RecommendationQuery, responses::RecommendationResponse,
};
use crate::models::submissions::entities::Submission;
use crate::models::{ApiResponse, ErrorCode};

/// limit 缺省或非正数时使用配置默认值
pub(crate) fn resolve_limit(limit: Option<i64>, default_limit: usize) -> usize {
    match limit {
        Some(limit) if limit > 0 => limit as usize,
        _ => default_limit,
    }
}

/// 读取失败时按空列表处理
pub(crate) fn or_empty<T>(loaded: Result<Vec<T>>, what: &str) -> Vec<T> {
    loaded.unwrap_or_else(|e| {
        tracing::warn!("Failed to load {} for recommendations, using empty list: {}", what, e);
        Vec::new()
    })
}

/// 平均分只统计已有分数的作答
pub(crate) fn build_response(
    student_id: i64,
    submissions: &[Submission],
    activities: &[Activity],
    limit: usize,
) -> RecommendationResponse {
    let scores: Vec<f64> = submissions
        .iter()
        .filter_map(|s| s.score.map(f64::from))
        .collect();
    let avg = if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };
    let attempted: HashSet<i64> = submissions.iter().map(|s| s.activity_id).collect();

    RecommendationResponse {
        generated_at: chrono::Utc::now(),
        student_id,
        strategy: STRATEGY.to_string(),
        student_avg_score: round2(avg),
        target_level: target_level(avg),
        recommendations: recommend(activities, &attempted, avg, limit),
    }
}

pub async fn recommend_for_student(
    service: &RecommendationService,
    request: &HttpRequest,
    student_id: i64,
    query: RecommendationQuery,
) -> ActixResult<HttpResponse> {
    if !RequireJWT::can_access_student(request, student_id) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You can only view your own recommendations",
        )));
    }

    let storage = service.get_storage(request);
    let limit = resolve_limit(query.limit, service.get_config().recommendation.default_limit);

    let submissions = or_empty(
        storage.list_submissions(None, Some(student_id)).await,
        "submissions",
    );
    let activities = or_empty(storage.list_activities(None).await, "activities");

    let response = build_response(student_id, &submissions, &activities, limit);

    tracing::debug!(
        "Recommended {} activities for student {}",
        response.recommendations.len(),
        student_id
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Recommendations generated successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SkillFlowError;
    use crate::models::evaluations::entities::PrerequisiteLevel;

    #[test]
    fn test_resolve_limit() {
        assert_eq!(resolve_limit(None, 6), 6);
        assert_eq!(resolve_limit(Some(0), 6), 6);
        assert_eq!(resolve_limit(Some(-2), 6), 6);
        assert_eq!(resolve_limit(Some(3), 6), 3);
    }

    #[test]
    fn test_failed_loads_degrade_to_empty_response() {
        let submissions: Vec<Submission> = or_empty(
            Err(SkillFlowError::database_operation("connection refused")),
            "submissions",
        );
        let activities: Vec<Activity> = or_empty(
            Err(SkillFlowError::database_operation("connection refused")),
            "activities",
        );
        assert!(submissions.is_empty());
        assert!(activities.is_empty());

        let response = build_response(5, &submissions, &activities, 6);
        assert_eq!(response.student_id, 5);
        assert_eq!(response.student_avg_score, 0.0);
        assert_eq!(response.target_level, PrerequisiteLevel::Beginner);
        assert!(response.recommendations.is_empty());
        assert_eq!(response.strategy, STRATEGY);
    }

    #[test]
    fn test_or_empty_keeps_loaded_rows() {
        assert_eq!(or_empty(Ok(vec![1, 2, 3]), "numbers"), vec![1, 2, 3]);
    }
}
