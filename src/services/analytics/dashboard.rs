use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::AnalyticsService;
use super::aggregate::{build_overview, empty_overview};
use crate::cache::{CacheResult, ObjectCache};
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::models::analytics::responses::DashboardOverview;
use crate::models::users::entities::UserRole;
use crate::storage::Storage;

const DASHBOARD_CACHE_KEY: &str = "analytics:dashboard";

async fn load_overview(storage: &Arc<dyn Storage>, at_risk_threshold: f64) -> Result<DashboardOverview> {
    let evaluations = storage.list_evaluations(None).await?;
    let submissions = storage.list_submissions(None, None).await?;
    let activities = storage.list_activities(None).await?;
    let registered_students = storage.count_users_by_role(UserRole::Student).await?;

    Ok(build_overview(
        &evaluations,
        &submissions,
        &activities,
        registered_students,
        at_risk_threshold,
    ))
}

async fn cached_overview(cache: &Arc<dyn ObjectCache>) -> Option<DashboardOverview> {
    match cache.get_raw(DASHBOARD_CACHE_KEY).await {
        CacheResult::Found(json) => match serde_json::from_str(&json) {
            Ok(overview) => Some(overview),
            Err(e) => {
                tracing::warn!("Dropping unreadable cached dashboard: {}", e);
                cache.remove(DASHBOARD_CACHE_KEY).await;
                None
            }
        },
        _ => None,
    }
}

/// 读取失败时返回空看板而不是错误
pub async fn get_dashboard(
    service: &AnalyticsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = &service.get_config().analytics;
    let cache = service
        .get_cache(request)
        .filter(|_| config.cache_ttl > 0);

    if let Some(cache) = &cache
        && let Some(overview) = cached_overview(cache).await
    {
        tracing::debug!("Dashboard served from cache");
        return Ok(HttpResponse::Ok()
            .json(ApiResponse::success(overview, "Dashboard retrieved successfully")));
    }

    let storage = service.get_storage(request);
    let overview = match load_overview(&storage, config.at_risk_threshold).await {
        Ok(overview) => {
            if let Some(cache) = &cache
                && let Ok(json) = serde_json::to_string(&overview)
            {
                cache
                    .insert_raw(DASHBOARD_CACHE_KEY.to_string(), json, config.cache_ttl)
                    .await;
            }
            overview
        }
        Err(e) => {
            tracing::error!("Failed to build dashboard, returning empty overview: {}", e);
            empty_overview()
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(overview, "Dashboard retrieved successfully")))
}
