use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;
use std::sync::Arc;

use super::SubmissionService;
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::submissions::{
    entities::Submission, requests::SubmissionListParams, responses::SubmissionRow,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::evaluations::load_evaluation;
use crate::storage::Storage;

/// 管理员的 evaluation_id 过滤优先；学生总是限定为本人
pub(crate) fn resolve_filters(
    is_admin: bool,
    user_id: i64,
    query: &SubmissionListParams,
) -> (Option<i64>, Option<i64>) {
    if is_admin {
        match query.evaluation_id {
            Some(evaluation_id) => (Some(evaluation_id), None),
            None => (None, query.student_id),
        }
    } else {
        (query.evaluation_id, Some(user_id))
    }
}

/// 附上测评标题
pub(crate) async fn to_rows(
    storage: &Arc<dyn Storage>,
    submissions: Vec<Submission>,
) -> Result<Vec<SubmissionRow>> {
    let titles: HashMap<i64, String> = storage
        .list_evaluations(None)
        .await?
        .into_iter()
        .map(|e| (e.id, e.title))
        .collect();

    Ok(submissions
        .into_iter()
        .map(|submission| {
            let title = titles
                .get(&submission.evaluation_id)
                .cloned()
                .unwrap_or_else(|| format!("Evaluation {}", submission.evaluation_id));
            SubmissionRow::new(submission, title)
        })
        .collect())
}

async fn respond_with_rows(
    storage: &Arc<dyn Storage>,
    evaluation_id: Option<i64>,
    student_id: Option<i64>,
) -> ActixResult<HttpResponse> {
    let rows = match storage.list_submissions(evaluation_id, student_id).await {
        Ok(submissions) => to_rows(storage, submissions).await,
        Err(e) => Err(e),
    };

    match rows {
        Ok(rows) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(rows, "Submissions retrieved successfully"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list submissions: {e}"),
            )),
        ),
    }
}

pub async fn list_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    query: SubmissionListParams,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let storage = service.get_storage(request);
    let (evaluation_id, student_id) = resolve_filters(user.is_admin(), user.id, &query);

    respond_with_rows(&storage, evaluation_id, student_id).await
}

pub async fn list_for_evaluation(
    service: &SubmissionService,
    request: &HttpRequest,
    evaluation_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = load_evaluation(&storage, evaluation_id).await {
        return Ok(response);
    }

    respond_with_rows(&storage, Some(evaluation_id), None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(evaluation_id: Option<i64>, student_id: Option<i64>) -> SubmissionListParams {
        SubmissionListParams {
            evaluation_id,
            student_id,
        }
    }

    #[test]
    fn test_admin_evaluation_filter_wins() {
        assert_eq!(resolve_filters(true, 1, &params(Some(3), Some(9))), (Some(3), None));
        assert_eq!(resolve_filters(true, 1, &params(None, Some(9))), (None, Some(9)));
        assert_eq!(resolve_filters(true, 1, &params(None, None)), (None, None));
    }

    #[test]
    fn test_student_is_scoped_to_self() {
        assert_eq!(resolve_filters(false, 5, &params(None, Some(9))), (None, Some(5)));
        assert_eq!(resolve_filters(false, 5, &params(Some(2), None)), (Some(2), Some(5)));
    }
}
