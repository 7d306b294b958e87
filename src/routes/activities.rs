use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::activities::requests::{
    ActivityRequest, CreateActivityResourceRequest, UpdateActivityResourceRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ActivityService;
use crate::utils::{SafeCompetenceIdI64, SafeIDI64};

// 懒加载的全局 ActivityService 实例
static ACTIVITY_SERVICE: Lazy<ActivityService> = Lazy::new(ActivityService::new_lazy);

pub async fn list_activities(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE.list_activities(&req, None).await
}

pub async fn list_by_competence(
    req: HttpRequest,
    path: SafeCompetenceIdI64,
) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE.list_activities(&req, Some(path.0)).await
}

pub async fn create_activity(
    req: HttpRequest,
    data: web::Json<ActivityRequest>,
) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE
        .create_activity(&req, data.into_inner())
        .await
}

pub async fn get_activity(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE.get_activity(&req, path.0).await
}

pub async fn update_activity(
    req: HttpRequest,
    path: SafeIDI64,
    data: web::Json<ActivityRequest>,
) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE
        .update_activity(&req, path.0, data.into_inner())
        .await
}

pub async fn delete_activity(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE.delete_activity(&req, path.0).await
}

pub async fn list_resources(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE.list_resources(&req, path.0).await
}

pub async fn create_resource(
    req: HttpRequest,
    path: SafeIDI64,
    data: web::Json<CreateActivityResourceRequest>,
) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE
        .create_resource(&req, path.0, data.into_inner())
        .await
}

pub async fn update_resource(
    req: HttpRequest,
    path: SafeIDI64,
    data: web::Json<UpdateActivityResourceRequest>,
) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE
        .update_resource(&req, path.0, data.into_inner())
        .await
}

pub async fn delete_resource(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE.delete_resource(&req, path.0).await
}

// 配置路由
pub fn configure_activity_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/activities")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(web::get().to(list_activities)).route(
                    web::post()
                        .to(create_activity)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .route(
                "/competence/{competence_id}",
                web::get().to(list_by_competence),
            )
            // 必须在 /{id} 系列之前注册
            .service(
                web::resource("/resources/{id}")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::put().to(update_resource))
                    .route(web::delete().to(delete_resource)),
            )
            .service(
                web::resource("/{id}/resources")
                    .route(web::get().to(list_resources))
                    .route(
                        web::post()
                            .to(create_resource)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_activity))
                    .route(
                        web::put()
                            .to(update_activity)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_activity)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
