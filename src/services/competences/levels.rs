use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CompetenceService, ensure_competence_exists};
use crate::models::competences::requests::LevelRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{trim_optional, trim_required};

fn normalize(req: LevelRequest) -> Result<LevelRequest, &'static str> {
    Ok(LevelRequest {
        competence_id: req.competence_id,
        level_type: req.level_type,
        label: trim_required(&req.label, "Level label is required")?,
        description: trim_optional(req.description),
    })
}

pub async fn create_level(
    service: &CompetenceService,
    request: &HttpRequest,
    req: LevelRequest,
) -> ActixResult<HttpResponse> {
    let req = match normalize(req) {
        Ok(req) => req,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::CompetenceInvalid, msg)));
        }
    };

    let storage = service.get_storage(request);
    if let Err(response) = ensure_competence_exists(&storage, req.competence_id).await {
        return Ok(response);
    }

    match storage.create_level(req).await {
        Ok(level) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(level, "Level created successfully"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create level: {e}"),
            )),
        ),
    }
}

pub async fn list_levels(
    service: &CompetenceService,
    request: &HttpRequest,
    competence_id: Option<i64>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_levels(competence_id).await {
        Ok(levels) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(levels, "Levels retrieved successfully"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list levels: {e}"),
            )),
        ),
    }
}

pub async fn get_level(
    service: &CompetenceService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_level_by_id(id).await {
        Ok(Some(level)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(level, "Level retrieved successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::LevelNotFound, "Level not found"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get level: {e}"),
            )),
        ),
    }
}

pub async fn update_level(
    service: &CompetenceService,
    request: &HttpRequest,
    id: i64,
    req: LevelRequest,
) -> ActixResult<HttpResponse> {
    let req = match normalize(req) {
        Ok(req) => req,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::CompetenceInvalid, msg)));
        }
    };

    let storage = service.get_storage(request);
    if let Err(response) = ensure_competence_exists(&storage, req.competence_id).await {
        return Ok(response);
    }

    match storage.update_level(id, req).await {
        Ok(Some(level)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(level, "Level updated successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::LevelNotFound, "Level not found"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update level: {e}"),
            )),
        ),
    }
}

pub async fn delete_level(
    service: &CompetenceService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_level(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Level deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::LevelNotFound, "Level not found"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete level: {e}"),
            )),
        ),
    }
}
