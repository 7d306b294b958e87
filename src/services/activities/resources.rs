use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ActivityService;
use crate::models::activities::requests::{
    CreateActivityResourceRequest, UpdateActivityResourceRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{trim_optional, trim_required};

pub async fn list_resources(
    service: &ActivityService,
    request: &HttpRequest,
    activity_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_activity_resources(activity_id).await {
        Ok(resources) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(resources, "Resources retrieved successfully"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list activity resources: {e}"),
            )),
        ),
    }
}

pub async fn create_resource(
    service: &ActivityService,
    request: &HttpRequest,
    activity_id: i64,
    req: CreateActivityResourceRequest,
) -> ActixResult<HttpResponse> {
    let title = match trim_required(&req.title, "Resource title is required") {
        Ok(title) => title,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ActivityInvalid, msg)));
        }
    };
    let req = CreateActivityResourceRequest {
        title,
        url: trim_optional(req.url),
        description: trim_optional(req.description),
        ..req
    };

    let storage = service.get_storage(request);

    // 确认活动存在
    match storage.get_activity_by_id(activity_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ActivityNotFound,
                "Activity not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get activity: {e}"),
                )),
            );
        }
    }

    match storage.create_activity_resource(activity_id, req).await {
        Ok(resource) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(resource, "Resource created successfully"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create activity resource: {e}"),
            )),
        ),
    }
}

/// 未提供的 title / resource_type 保持原值
pub async fn update_resource(
    service: &ActivityService,
    request: &HttpRequest,
    id: i64,
    req: UpdateActivityResourceRequest,
) -> ActixResult<HttpResponse> {
    let title = match req.title.as_deref().map(|t| trim_required(t, "Resource title cannot be empty")) {
        Some(Ok(title)) => Some(title),
        Some(Err(msg)) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ActivityInvalid, msg)));
        }
        None => None,
    };
    let req = UpdateActivityResourceRequest {
        title,
        resource_type: req.resource_type,
        url: trim_optional(req.url),
        description: trim_optional(req.description),
    };

    let storage = service.get_storage(request);
    match storage.update_activity_resource(id, req).await {
        Ok(Some(resource)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(resource, "Resource updated successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ActivityResourceNotFound,
            "Resource not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update activity resource: {e}"),
            )),
        ),
    }
}

pub async fn delete_resource(
    service: &ActivityService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_activity_resource(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Resource deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ActivityResourceNotFound,
            "Resource not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete activity resource: {e}"),
            )),
        ),
    }
}
