use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::entities::{SaveOutcome, Submission};
use crate::models::submissions::{requests::SubmitRequest, responses::SubmitResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::evaluations::scoring::grade;

/// 不允许提交的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubmitRejection {
    NotOwner,
    AlreadySubmitted,
    NoQuestions,
}

impl SubmitRejection {
    fn into_response(self) -> HttpResponse {
        match self {
            SubmitRejection::NotOwner => HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "You can only submit your own attempt",
            )),
            SubmitRejection::AlreadySubmitted => {
                HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::SubmissionAlreadySubmitted,
                    "Submission has already been submitted",
                ))
            }
            SubmitRejection::NoQuestions => {
                HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::EvaluationHasNoQuestions,
                    "Evaluation has no questions.",
                ))
            }
        }
    }
}

/// 依次检查归属、状态和题目数
pub(crate) fn check_submittable(
    submission: &Submission,
    user_id: i64,
    question_count: usize,
) -> Result<(), SubmitRejection> {
    if submission.student_id != user_id {
        return Err(SubmitRejection::NotOwner);
    }
    if submission.is_submitted() {
        return Err(SubmitRejection::AlreadySubmitted);
    }
    if question_count == 0 {
        return Err(SubmitRejection::NoQuestions);
    }
    Ok(())
}

/// 提交答案并判分
///
/// 只有作答本人可以提交，且只能提交一次。
pub async fn submit_answers(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    req: SubmitRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let storage = service.get_storage(request);

    // 1. 读取作答记录
    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "Submission not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get submission: {e}"),
                )),
            );
        }
    };

    // 2. 题目
    let questions = match storage.list_questions(submission.evaluation_id).await {
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

    // 3. 归属、状态与题目数
    if let Err(rejection) = check_submittable(&submission, user_id, questions.len()) {
        return Ok(rejection.into_response());
    }

    // 4. 判分并保存，状态以存储层的条件更新为准
    let (graded, score) = grade(&questions, &req.answers);
    match storage
        .save_submission_result(submission_id, graded, score)
        .await
    {
        Ok(SaveOutcome::Saved(saved)) => {
            tracing::info!(
                "Submission {} submitted by student {} with score {}",
                submission_id,
                user_id,
                score
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SubmitResponse {
                    submission_id: saved.id,
                    score,
                    submitted_at: saved.submitted_at,
                    status: saved.status,
                },
                "Submission graded successfully",
            )))
        }
        Ok(SaveOutcome::AlreadySubmitted) => {
            Ok(SubmitRejection::AlreadySubmitted.into_response())
        }
        Ok(SaveOutcome::NotFound) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "Submission not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to save submission: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::evaluations::entities::PrerequisiteLevel;
    use crate::models::submissions::entities::SubmissionStatus;

    fn attempt(student_id: i64, status: SubmissionStatus) -> Submission {
        Submission {
            id: 1,
            evaluation_id: 2,
            activity_id: 3,
            prerequisite_level: PrerequisiteLevel::Beginner,
            student_id,
            student_full_name: "Ada".to_string(),
            student_level: None,
            score: None,
            status,
            started_at: chrono::Utc::now(),
            submitted_at: None,
        }
    }

    #[test]
    fn test_check_submittable() {
        let open = attempt(7, SubmissionStatus::InProgress);
        assert_eq!(check_submittable(&open, 7, 3), Ok(()));
        assert_eq!(
            check_submittable(&open, 8, 3),
            Err(SubmitRejection::NotOwner)
        );
        assert_eq!(
            check_submittable(&open, 7, 0),
            Err(SubmitRejection::NoQuestions)
        );

        let done = attempt(7, SubmissionStatus::Submitted);
        assert_eq!(
            check_submittable(&done, 7, 3),
            Err(SubmitRejection::AlreadySubmitted)
        );
    }
}
