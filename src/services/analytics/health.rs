use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::AnalyticsService;
use crate::models::analytics::responses::HealthResponse;
use crate::models::{ApiResponse, AppStartTime};

/// 无需登录
pub async fn health(
    service: &AnalyticsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let now = chrono::Utc::now();
    let uptime_seconds = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| now.signed_duration_since(start.start_datetime).num_seconds())
        .unwrap_or_default();

    let response = HealthResponse {
        status: "UP".to_string(),
        service: service.get_config().app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds,
        timestamp: now,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Service is healthy")))
}
