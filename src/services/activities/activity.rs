use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ActivityService;
use crate::models::activities::requests::{ACTIVITY_DESCRIPTION_MAX_LEN, ActivityRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::competences::ensure_competence_exists;
use crate::utils::validate::{trim_optional, trim_required};

fn normalize(req: ActivityRequest) -> Result<ActivityRequest, &'static str> {
    let title = trim_required(&req.title, "Activity title is required")?;
    if req.duration <= 0 {
        return Err("Activity duration must be a positive number of minutes");
    }
    let description = trim_optional(req.description);
    if description
        .as_ref()
        .is_some_and(|d| d.chars().count() > ACTIVITY_DESCRIPTION_MAX_LEN)
    {
        return Err("Activity description must be at most 2000 characters");
    }

    Ok(ActivityRequest {
        title,
        description,
        ..req
    })
}

pub async fn create_activity(
    service: &ActivityService,
    request: &HttpRequest,
    req: ActivityRequest,
) -> ActixResult<HttpResponse> {
    let req = match normalize(req) {
        Ok(req) => req,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ActivityInvalid, msg)));
        }
    };

    let storage = service.get_storage(request);
    if let Err(response) = ensure_competence_exists(&storage, req.competence_id).await {
        return Ok(response);
    }

    match storage.create_activity(req).await {
        Ok(activity) => {
            tracing::info!("Activity {} created", activity.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(activity, "Activity created successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create activity: {e}"),
            )),
        ),
    }
}

pub async fn list_activities(
    service: &ActivityService,
    request: &HttpRequest,
    competence_id: Option<i64>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_activities(competence_id).await {
        Ok(activities) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(activities, "Activities retrieved successfully"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list activities: {e}"),
            )),
        ),
    }
}

pub async fn get_activity(
    service: &ActivityService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_activity_by_id(id).await {
        Ok(Some(activity)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(activity, "Activity retrieved successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ActivityNotFound,
            "Activity not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get activity: {e}"),
            )),
        ),
    }
}

pub async fn update_activity(
    service: &ActivityService,
    request: &HttpRequest,
    id: i64,
    req: ActivityRequest,
) -> ActixResult<HttpResponse> {
    let req = match normalize(req) {
        Ok(req) => req,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ActivityInvalid, msg)));
        }
    };

    let storage = service.get_storage(request);
    if let Err(response) = ensure_competence_exists(&storage, req.competence_id).await {
        return Ok(response);
    }

    match storage.update_activity(id, req).await {
        Ok(Some(activity)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(activity, "Activity updated successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ActivityNotFound,
            "Activity not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update activity: {e}"),
            )),
        ),
    }
}

/// 资源与测评随活动一并删除
pub async fn delete_activity(
    service: &ActivityService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_activity(id).await {
        Ok(true) => {
            tracing::info!("Activity {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Activity deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ActivityNotFound,
            "Activity not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete activity: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activities::entities::{ActivityType, Difficulty};

    fn request(duration: i32, description: Option<String>) -> ActivityRequest {
        ActivityRequest {
            competence_id: 1,
            title: "  Fractions drill ".into(),
            description,
            activity_type: ActivityType::Exercice,
            duration,
            level: Difficulty::Easy,
        }
    }

    #[test]
    fn test_normalize_activity() {
        let req = normalize(request(45, Some(" practice ".into()))).unwrap();
        assert_eq!(req.title, "Fractions drill");
        assert_eq!(req.description.as_deref(), Some("practice"));
        assert_eq!(req.duration, 45);
    }

    #[test]
    fn test_normalize_rejects_bad_duration_and_long_description() {
        assert!(normalize(request(0, None)).is_err());
        assert!(normalize(request(-5, None)).is_err());
        assert!(normalize(request(10, Some("x".repeat(2001)))).is_err());
        assert!(normalize(request(10, Some("x".repeat(2000)))).is_ok());
    }
}
