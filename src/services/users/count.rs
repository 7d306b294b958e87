use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::users::{entities::UserRole, responses::StudentCountResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn count_students(
    service: &UserService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.count_users_by_role(UserRole::Student).await {
        Ok(count) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentCountResponse { count },
            "Student count retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to count students: {e}"),
            )),
        ),
    }
}
