use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::evaluations::entities::Question;
use crate::models::submissions::{
    entities::StudentAnswer,
    responses::{AnswerDetail, SubmissionDetail},
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::submissions::list::to_rows;

const DELETED_QUESTION_LABEL: &str = "(question deleted)";

/// answers 已按 question_id 升序
pub(crate) fn answer_details(answers: Vec<StudentAnswer>, questions: &[Question]) -> Vec<AnswerDetail> {
    let by_id: HashMap<i64, &Question> = questions.iter().map(|q| (q.id, q)).collect();

    answers
        .into_iter()
        .map(|answer| {
            let question = by_id.get(&answer.question_id);
            AnswerDetail {
                question_id: answer.question_id,
                question_label: question
                    .map(|q| q.label.clone())
                    .unwrap_or_else(|| DELETED_QUESTION_LABEL.to_string()),
                chosen_answer: answer.chosen_answer,
                correct_answer: question.map(|q| q.correct_answer.clone()),
                correct: answer.correct,
            }
        })
        .collect()
}

pub async fn get_submission_detail(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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

    // 管理员或作答本人
    if !RequireJWT::can_access_student(request, submission.student_id) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You can only view your own submissions",
        )));
    }

    let answers = match storage.list_answers(submission_id).await {
        Ok(answers) => answers,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list answers: {e}"),
                )),
            );
        }
    };

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

    let row = match to_rows(&storage, vec![submission]).await {
        Ok(mut rows) if !rows.is_empty() => rows.remove(0),
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "Submission not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load evaluation: {e}"),
                )),
            );
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SubmissionDetail {
            row,
            answers: answer_details(answers, &questions),
        },
        "Submission retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(question_id: i64, chosen: &str, correct: bool) -> StudentAnswer {
        StudentAnswer {
            id: question_id * 10,
            submission_id: 1,
            question_id,
            chosen_answer: chosen.into(),
            correct,
        }
    }

    #[test]
    fn test_answer_details_mark_deleted_questions() {
        let questions = vec![Question {
            id: 1,
            evaluation_id: 1,
            label: "Capital of France?".into(),
            options: vec!["Paris".into(), "Lyon".into()],
            correct_answer: "Paris".into(),
            position: 1,
        }];

        let details = answer_details(
            vec![answer(1, "Lyon", false), answer(2, "", false)],
            &questions,
        );

        assert_eq!(details[0].question_label, "Capital of France?");
        assert_eq!(details[0].correct_answer.as_deref(), Some("Paris"));
        assert!(!details[0].correct);
        assert_eq!(details[1].question_label, "(question deleted)");
        assert_eq!(details[1].correct_answer, None);
    }
}
