use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::{EvaluationService, load_evaluation};
use crate::models::evaluations::{
    entities::{Evaluation, EvaluationStatus},
    requests::{EvaluationRequest, PublishRequest},
    responses::EvaluationSummary,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate::{trim_optional, trim_required};

fn normalize(req: EvaluationRequest) -> Result<EvaluationRequest, &'static str> {
    Ok(EvaluationRequest {
        title: trim_required(&req.title, "Evaluation title is required")?,
        introduction: trim_optional(req.introduction),
        ..req
    })
}

async fn ensure_activity_exists(
    storage: &Arc<dyn Storage>,
    activity_id: i64,
) -> Result<(), HttpResponse> {
    match storage.get_activity_by_id(activity_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ActivityNotFound,
            format!("Activity {activity_id} not found"),
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get activity: {e}"),
            )),
        ),
    }
}

/// 新测评总是草稿状态
pub async fn create_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    req: EvaluationRequest,
) -> ActixResult<HttpResponse> {
    let req = match normalize(req) {
        Ok(req) => req,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::EvaluationInvalid, msg)));
        }
    };

    let storage = service.get_storage(request);
    if let Err(response) = ensure_activity_exists(&storage, req.activity_id).await {
        return Ok(response);
    }

    match storage.create_evaluation(req).await {
        Ok(evaluation) => {
            tracing::info!("Evaluation {} created as draft", evaluation.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                EvaluationSummary::new(evaluation, 0),
                "Evaluation created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create evaluation: {e}"),
            )),
        ),
    }
}

/// 按 id 降序
pub async fn list_evaluations(
    service: &EvaluationService,
    request: &HttpRequest,
    status: Option<EvaluationStatus>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let evaluations = match storage.list_evaluations(status).await {
        Ok(evaluations) => evaluations,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list evaluations: {e}"),
                )),
            );
        }
    };

    let counts = match storage.count_questions_grouped().await {
        Ok(counts) => counts,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to count questions: {e}"),
                )),
            );
        }
    };

    let summaries: Vec<EvaluationSummary> = evaluations
        .into_iter()
        .map(|evaluation| {
            let count = counts.get(&evaluation.id).copied().unwrap_or(0);
            EvaluationSummary::new(evaluation, count)
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        summaries,
        "Evaluations retrieved successfully",
    )))
}

pub async fn get_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let evaluation = match load_evaluation(&storage, id).await {
        Ok(evaluation) => evaluation,
        Err(response) => return Ok(response),
    };

    let count = storage.count_questions(id).await;
    Ok(summary_response(evaluation, count, "Evaluation retrieved successfully"))
}

/// 题目数读取失败时返回 500，不用 0 代替
pub(crate) fn summary_response(
    evaluation: Evaluation,
    count: crate::errors::Result<u64>,
    message: &str,
) -> HttpResponse {
    match count {
        Ok(count) => HttpResponse::Ok().json(ApiResponse::success(
            EvaluationSummary::new(evaluation, count),
            message,
        )),
        Err(e) => HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("Failed to count questions: {e}"),
        )),
    }
}

/// 状态不受影响
pub async fn update_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    id: i64,
    req: EvaluationRequest,
) -> ActixResult<HttpResponse> {
    let req = match normalize(req) {
        Ok(req) => req,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::EvaluationInvalid, msg)));
        }
    };

    let storage = service.get_storage(request);
    if let Err(response) = ensure_activity_exists(&storage, req.activity_id).await {
        return Ok(response);
    }

    match storage.update_evaluation(id, req).await {
        Ok(Some(evaluation)) => {
            let count = storage.count_questions(id).await;
            Ok(summary_response(evaluation, count, "Evaluation updated successfully"))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EvaluationNotFound,
            "Evaluation not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update evaluation: {e}"),
            )),
        ),
    }
}

/// 题目、作答与答案一并删除
pub async fn delete_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_evaluation(id).await {
        Ok(true) => {
            tracing::info!("Evaluation {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Evaluation deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EvaluationNotFound,
            "Evaluation not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete evaluation: {e}"),
            )),
        ),
    }
}

/// 发布要求至少有一道题；撤回发布没有限制
pub async fn publish_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    id: i64,
    req: PublishRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = load_evaluation(&storage, id).await {
        return Ok(response);
    }

    let count = match storage.count_questions(id).await {
        Ok(count) => count,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to count questions: {e}"),
                )),
            );
        }
    };

    if req.published && count == 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::EvaluationHasNoQuestions,
            "Cannot publish an evaluation without questions",
        )));
    }

    let status = if req.published {
        EvaluationStatus::Published
    } else {
        EvaluationStatus::Draft
    };

    match storage.set_evaluation_status(id, status).await {
        Ok(Some(evaluation)) => {
            tracing::info!("Evaluation {} is now {}", id, status);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                EvaluationSummary::new(evaluation, count),
                "Evaluation status updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EvaluationNotFound,
            "Evaluation not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update evaluation status: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SkillFlowError;
    use crate::models::evaluations::entities::PrerequisiteLevel;
    use actix_web::http::StatusCode;

    fn evaluation() -> Evaluation {
        Evaluation {
            id: 4,
            activity_id: 2,
            title: "Quiz boucles".to_string(),
            prerequisite_level: PrerequisiteLevel::Beginner,
            introduction: None,
            status: EvaluationStatus::Draft,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_summary_response_reports_count_failure() {
        let ok = summary_response(evaluation(), Ok(3), "Evaluation updated successfully");
        assert_eq!(ok.status(), StatusCode::OK);

        let failed = summary_response(
            evaluation(),
            Err(SkillFlowError::database_operation("disk I/O error")),
            "Evaluation updated successfully",
        );
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
