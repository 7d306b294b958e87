use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CompetenceService, ensure_competence_exists};
use crate::models::competences::requests::CompetenceResourceRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{trim_optional, trim_required};

fn normalize(req: CompetenceResourceRequest) -> Result<CompetenceResourceRequest, &'static str> {
    Ok(CompetenceResourceRequest {
        competence_id: req.competence_id,
        title: trim_required(&req.title, "Resource title is required")?,
        url: trim_optional(req.url),
    })
}

pub async fn create_resource(
    service: &CompetenceService,
    request: &HttpRequest,
    req: CompetenceResourceRequest,
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

    match storage.create_competence_resource(req).await {
        Ok(resource) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(resource, "Resource created successfully"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create resource: {e}"),
            )),
        ),
    }
}

pub async fn list_resources(
    service: &CompetenceService,
    request: &HttpRequest,
    competence_id: Option<i64>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_competence_resources(competence_id).await {
        Ok(resources) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(resources, "Resources retrieved successfully"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list resources: {e}"),
            )),
        ),
    }
}

pub async fn get_resource(
    service: &CompetenceService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_competence_resource_by_id(id).await {
        Ok(Some(resource)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(resource, "Resource retrieved successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CompetenceResourceNotFound,
            "Resource not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get resource: {e}"),
            )),
        ),
    }
}

pub async fn update_resource(
    service: &CompetenceService,
    request: &HttpRequest,
    id: i64,
    req: CompetenceResourceRequest,
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

    match storage.update_competence_resource(id, req).await {
        Ok(Some(resource)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(resource, "Resource updated successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CompetenceResourceNotFound,
            "Resource not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update resource: {e}"),
            )),
        ),
    }
}

pub async fn delete_resource(
    service: &CompetenceService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_competence_resource(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Resource deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CompetenceResourceNotFound,
            "Resource not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete resource: {e}"),
            )),
        ),
    }
}
