use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CompetenceService, ensure_competence_exists};
use crate::models::competences::requests::SubCompetenceRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{trim_optional, trim_required};

fn normalize(req: SubCompetenceRequest) -> Result<SubCompetenceRequest, &'static str> {
    Ok(SubCompetenceRequest {
        competence_id: req.competence_id,
        name: trim_required(&req.name, "Sub-competence name is required")?,
        description: trim_optional(req.description),
    })
}

pub async fn create_sub_competence(
    service: &CompetenceService,
    request: &HttpRequest,
    req: SubCompetenceRequest,
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

    match storage.create_sub_competence(req).await {
        Ok(sub) => Ok(HttpResponse::Created().json(ApiResponse::success(
            sub,
            "Sub-competence created successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create sub-competence: {e}"),
            )),
        ),
    }
}

pub async fn list_sub_competences(
    service: &CompetenceService,
    request: &HttpRequest,
    competence_id: Option<i64>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_sub_competences(competence_id).await {
        Ok(subs) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            subs,
            "Sub-competences retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list sub-competences: {e}"),
            )),
        ),
    }
}

pub async fn get_sub_competence(
    service: &CompetenceService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_sub_competence_by_id(id).await {
        Ok(Some(sub)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            sub,
            "Sub-competence retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubCompetenceNotFound,
            "Sub-competence not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get sub-competence: {e}"),
            )),
        ),
    }
}

/// 可以挂到另一个已存在的能力下
pub async fn update_sub_competence(
    service: &CompetenceService,
    request: &HttpRequest,
    id: i64,
    req: SubCompetenceRequest,
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

    match storage.update_sub_competence(id, req).await {
        Ok(Some(sub)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            sub,
            "Sub-competence updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubCompetenceNotFound,
            "Sub-competence not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update sub-competence: {e}"),
            )),
        ),
    }
}

pub async fn delete_sub_competence(
    service: &CompetenceService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_sub_competence(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Sub-competence deleted successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubCompetenceNotFound,
            "Sub-competence not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete sub-competence: {e}"),
            )),
        ),
    }
}
