use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::{CompetenceService, ensure_competence_exists};
use crate::models::competences::requests::PrerequisiteRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 两端能力都必须存在且不能相同
async fn check_endpoints(
    storage: &Arc<dyn Storage>,
    req: &PrerequisiteRequest,
) -> Result<(), HttpResponse> {
    if req.source_id == req.target_id {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::PrerequisiteInvalid,
            "A competence cannot be a prerequisite of itself",
        )));
    }
    ensure_competence_exists(storage, req.source_id).await?;
    ensure_competence_exists(storage, req.target_id).await
}

pub async fn create_prerequisite(
    service: &CompetenceService,
    request: &HttpRequest,
    req: PrerequisiteRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    if let Err(response) = check_endpoints(&storage, &req).await {
        return Ok(response);
    }

    match storage.create_prerequisite(req).await {
        Ok(prerequisite) => Ok(HttpResponse::Created().json(ApiResponse::success(
            prerequisite,
            "Prerequisite created successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create prerequisite: {e}"),
            )),
        ),
    }
}

pub async fn list_prerequisites(
    service: &CompetenceService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_prerequisites().await {
        Ok(prerequisites) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            prerequisites,
            "Prerequisites retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list prerequisites: {e}"),
            )),
        ),
    }
}

pub async fn get_prerequisite(
    service: &CompetenceService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_prerequisite_by_id(id).await {
        Ok(Some(prerequisite)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            prerequisite,
            "Prerequisite retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PrerequisiteNotFound,
            "Prerequisite not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get prerequisite: {e}"),
            )),
        ),
    }
}

pub async fn update_prerequisite(
    service: &CompetenceService,
    request: &HttpRequest,
    id: i64,
    req: PrerequisiteRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    if let Err(response) = check_endpoints(&storage, &req).await {
        return Ok(response);
    }

    match storage.update_prerequisite(id, req).await {
        Ok(Some(prerequisite)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            prerequisite,
            "Prerequisite updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PrerequisiteNotFound,
            "Prerequisite not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update prerequisite: {e}"),
            )),
        ),
    }
}

pub async fn delete_prerequisite(
    service: &CompetenceService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_prerequisite(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Prerequisite deleted successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PrerequisiteNotFound,
            "Prerequisite not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete prerequisite: {e}"),
            )),
        ),
    }
}
