use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{EvaluationService, load_evaluation};
use crate::middlewares::RequireJWT;
use crate::models::evaluations::{
    requests::StartEvaluationRequest,
    responses::{StartEvaluationResponse, StudentQuestion},
};
use crate::models::submissions::entities::NewSubmission;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::trim_optional;

/// 开始作答
///
/// 学生身份取自登录用户。已有未提交的作答时直接复用，否则新建一条，
/// 并记下测评当前的活动与先修等级。
pub async fn start_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    evaluation_id: i64,
    req: StartEvaluationRequest,
) -> ActixResult<HttpResponse> {
    let Some(student) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let storage = service.get_storage(request);

    let evaluation = match load_evaluation(&storage, evaluation_id).await {
        Ok(evaluation) => evaluation,
        Err(response) => return Ok(response),
    };

    if !evaluation.is_published() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::EvaluationNotPublished,
            "Evaluation is not published",
        )));
    }

    let questions = match storage.list_questions(evaluation_id).await {
        Ok(questions) => questions,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list questions: {e}"),
                )),
            );
        }
    };

    if questions.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::EvaluationHasNoQuestions,
            "Evaluation has no questions",
        )));
    }

    let new_submission = NewSubmission {
        evaluation_id,
        activity_id: evaluation.activity_id,
        prerequisite_level: evaluation.prerequisite_level,
        student_id: student.id,
        student_full_name: student.full_name,
        student_level: trim_optional(req.student_level),
    };

    match storage.start_or_resume_submission(new_submission).await {
        Ok(submission) => {
            tracing::info!(
                "Student {} started evaluation {} (submission {})",
                student.id,
                evaluation_id,
                submission.id
            );
            let response = StartEvaluationResponse {
                submission_id: submission.id,
                evaluation_id,
                title: evaluation.title,
                introduction: evaluation.introduction,
                started_at: submission.started_at,
                questions: questions.into_iter().map(StudentQuestion::from).collect(),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Evaluation started")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to start evaluation: {e}"),
            )),
        ),
    }
}
