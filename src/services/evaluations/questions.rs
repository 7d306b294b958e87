use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::scoring::normalize_question;
use super::{EvaluationService, load_evaluation};
use crate::models::evaluations::{requests::CreateQuestionRequest, responses::StudentQuestion};
use crate::models::{ApiResponse, ErrorCode};

/// 已发布的测评不能再加题
pub async fn add_question(
    service: &EvaluationService,
    request: &HttpRequest,
    evaluation_id: i64,
    req: CreateQuestionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let evaluation = match load_evaluation(&storage, evaluation_id).await {
        Ok(evaluation) => evaluation,
        Err(response) => return Ok(response),
    };

    if evaluation.is_published() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::EvaluationAlreadyPublished,
            "Questions cannot be added to a published evaluation",
        )));
    }

    let question = match normalize_question(req) {
        Ok(question) => question,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::QuestionInvalid, msg)));
        }
    };

    match storage
        .create_question(
            evaluation_id,
            question.label,
            question.options,
            question.correct_answer,
        )
        .await
    {
        Ok(question) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(question, "Question added successfully"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to add question: {e}"),
            )),
        ),
    }
}

pub async fn list_questions_for_admin(
    service: &EvaluationService,
    request: &HttpRequest,
    evaluation_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = load_evaluation(&storage, evaluation_id).await {
        return Ok(response);
    }

    match storage.list_questions(evaluation_id).await {
        Ok(questions) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(questions, "Questions retrieved successfully"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list questions: {e}"),
            )),
        ),
    }
}

/// 仅已发布测评，且不返回正确答案
pub async fn list_questions_for_student(
    service: &EvaluationService,
    request: &HttpRequest,
    evaluation_id: i64,
) -> ActixResult<HttpResponse> {
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

    match storage.list_questions(evaluation_id).await {
        Ok(questions) => {
            let questions: Vec<StudentQuestion> =
                questions.into_iter().map(StudentQuestion::from).collect();
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(questions, "Questions retrieved successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list questions: {e}"),
            )),
        ),
    }
}
