use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CompetenceService;
use crate::models::competences::requests::CompetenceRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{trim_optional, trim_required};

fn normalize(req: CompetenceRequest) -> Result<CompetenceRequest, &'static str> {
    Ok(CompetenceRequest {
        code: trim_required(&req.code, "Competence code is required")?,
        name: trim_required(&req.name, "Competence name is required")?,
        description: trim_optional(req.description),
    })
}

pub async fn create_competence(
    service: &CompetenceService,
    request: &HttpRequest,
    req: CompetenceRequest,
) -> ActixResult<HttpResponse> {
    let req = match normalize(req) {
        Ok(req) => req,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::CompetenceInvalid, msg)));
        }
    };

    let storage = service.get_storage(request);
    match storage.create_competence(req).await {
        Ok(competence) => Ok(HttpResponse::Created().json(ApiResponse::success(
            competence,
            "Competence created successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create competence: {e}"),
            )),
        ),
    }
}

pub async fn list_competences(
    service: &CompetenceService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_competences().await {
        Ok(competences) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            competences,
            "Competences retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list competences: {e}"),
            )),
        ),
    }
}

pub async fn get_competence(
    service: &CompetenceService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_competence_by_id(id).await {
        Ok(Some(competence)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            competence,
            "Competence retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CompetenceNotFound,
            "Competence not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get competence: {e}"),
            )),
        ),
    }
}

pub async fn update_competence(
    service: &CompetenceService,
    request: &HttpRequest,
    id: i64,
    req: CompetenceRequest,
) -> ActixResult<HttpResponse> {
    let req = match normalize(req) {
        Ok(req) => req,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::CompetenceInvalid, msg)));
        }
    };

    let storage = service.get_storage(request);
    match storage.update_competence(id, req).await {
        Ok(Some(competence)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            competence,
            "Competence updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CompetenceNotFound,
            "Competence not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update competence: {e}"),
            )),
        ),
    }
}

/// 子能力、等级、资源与先修关系随之级联删除
pub async fn delete_competence(
    service: &CompetenceService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_competence(id).await {
        Ok(true) => {
            tracing::info!("Competence {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Competence deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CompetenceNotFound,
            "Competence not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete competence: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_requires_fields() {
        let req = normalize(CompetenceRequest {
            code: " ALG-1 ".into(),
            name: "Algebra".into(),
            description: Some("   ".into()),
        })
        .unwrap();
        assert_eq!(req.code, "ALG-1");
        assert_eq!(req.description, None);

        let missing = normalize(CompetenceRequest {
            code: "X".into(),
            name: " ".into(),
            description: None,
        });
        assert_eq!(missing.err(), Some("Competence name is required"));
    }
}
