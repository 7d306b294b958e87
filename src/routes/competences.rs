use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::competences::requests::{
    CompetenceRequest, CompetenceResourceRequest, LevelRequest, PrerequisiteRequest,
    SubCompetenceRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CompetenceService;
use crate::utils::{SafeCompetenceIdI64, SafeIDI64};

// 懒加载的全局 CompetenceService 实例
static COMPETENCE_SERVICE: Lazy<CompetenceService> = Lazy::new(CompetenceService::new_lazy);

// 能力
pub async fn list_competences(req: HttpRequest) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE.list_competences(&req).await
}

pub async fn create_competence(
    req: HttpRequest,
    data: web::Json<CompetenceRequest>,
) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE
        .create_competence(&req, data.into_inner())
        .await
}

pub async fn get_competence(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE.get_competence(&req, path.0).await
}

pub async fn update_competence(
    req: HttpRequest,
    path: SafeIDI64,
    data: web::Json<CompetenceRequest>,
) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE
        .update_competence(&req, path.0, data.into_inner())
        .await
}

pub async fn delete_competence(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE.delete_competence(&req, path.0).await
}

// 子能力
pub async fn list_sub_competences(req: HttpRequest) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE.list_sub_competences(&req, None).await
}

pub async fn list_sub_competences_by_competence(
    req: HttpRequest,
    path: SafeCompetenceIdI64,
) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE
        .list_sub_competences(&req, Some(path.0))
        .await
}

pub async fn create_sub_competence(
    req: HttpRequest,
    data: web::Json<SubCompetenceRequest>,
) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE
        .create_sub_competence(&req, data.into_inner())
        .await
}

pub async fn get_sub_competence(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE.get_sub_competence(&req, path.0).await
}

pub async fn update_sub_competence(
    req: HttpRequest,
    path: SafeIDI64,
    data: web::Json<SubCompetenceRequest>,
) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE
        .update_sub_competence(&req, path.0, data.into_inner())
        .await
}

pub async fn delete_sub_competence(
    req: HttpRequest,
    path: SafeIDI64,
) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE.delete_sub_competence(&req, path.0).await
}

// 等级
pub async fn list_levels(req: HttpRequest) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE.list_levels(&req, None).await
}

pub async fn list_levels_by_competence(
    req: HttpRequest,
    path: SafeCompetenceIdI64,
) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE.list_levels(&req, Some(path.0)).await
}

pub async fn create_level(
    req: HttpRequest,
    data: web::Json<LevelRequest>,
) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE.create_level(&req, data.into_inner()).await
}

pub async fn get_level(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE.get_level(&req, path.0).await
}

pub async fn update_level(
    req: HttpRequest,
    path: SafeIDI64,
    data: web::Json<LevelRequest>,
) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE
        .update_level(&req, path.0, data.into_inner())
        .await
}

pub async fn delete_level(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE.delete_level(&req, path.0).await
}

// 能力资源
pub async fn list_resources(req: HttpRequest) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE.list_resources(&req, None).await
}

pub async fn list_resources_by_competence(
    req: HttpRequest,
    path: SafeCompetenceIdI64,
) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE.list_resources(&req, Some(path.0)).await
}

pub async fn create_resource(
    req: HttpRequest,
    data: web::Json<CompetenceResourceRequest>,
) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE
        .create_resource(&req, data.into_inner())
        .await
}

pub async fn get_resource(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE.get_resource(&req, path.0).await
}

pub async fn update_resource(
    req: HttpRequest,
    path: SafeIDI64,
    data: web::Json<CompetenceResourceRequest>,
) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE
        .update_resource(&req, path.0, data.into_inner())
        .await
}

pub async fn delete_resource(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE.delete_resource(&req, path.0).await
}

// 先修关系
pub async fn list_prerequisites(req: HttpRequest) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE.list_prerequisites(&req).await
}

pub async fn create_prerequisite(
    req: HttpRequest,
    data: web::Json<PrerequisiteRequest>,
) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE
        .create_prerequisite(&req, data.into_inner())
        .await
}

pub async fn get_prerequisite(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE.get_prerequisite(&req, path.0).await
}

pub async fn update_prerequisite(
    req: HttpRequest,
    path: SafeIDI64,
    data: web::Json<PrerequisiteRequest>,
) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE
        .update_prerequisite(&req, path.0, data.into_inner())
        .await
}

pub async fn delete_prerequisite(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    COMPETENCE_SERVICE.delete_prerequisite(&req, path.0).await
}

fn admin_only() -> middlewares::RequireRole {
    middlewares::RequireRole::new_any(UserRole::admin_roles())
}

// 配置路由
// 读接口对所有登录用户开放，写接口仅管理员
pub fn configure_competence_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/competences")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_competences))
                    .route(web::post().to(create_competence).wrap(admin_only())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_competence))
                    .route(web::put().to(update_competence).wrap(admin_only()))
                    .route(web::delete().to(delete_competence).wrap(admin_only())),
            ),
    )
    .service(
        web::scope("/api/v1/subcompetences")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_sub_competences))
                    .route(web::post().to(create_sub_competence).wrap(admin_only())),
            )
            .route(
                "/competence/{competence_id}",
                web::get().to(list_sub_competences_by_competence),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_sub_competence))
                    .route(web::put().to(update_sub_competence).wrap(admin_only()))
                    .route(web::delete().to(delete_sub_competence).wrap(admin_only())),
            ),
    )
    .service(
        web::scope("/api/v1/levels")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_levels))
                    .route(web::post().to(create_level).wrap(admin_only())),
            )
            .route(
                "/competence/{competence_id}",
                web::get().to(list_levels_by_competence),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_level))
                    .route(web::put().to(update_level).wrap(admin_only()))
                    .route(web::delete().to(delete_level).wrap(admin_only())),
            ),
    )
    .service(
        web::scope("/api/v1/resources")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_resources))
                    .route(web::post().to(create_resource).wrap(admin_only())),
            )
            .route(
                "/competence/{competence_id}",
                web::get().to(list_resources_by_competence),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_resource))
                    .route(web::put().to(update_resource).wrap(admin_only()))
                    .route(web::delete().to(delete_resource).wrap(admin_only())),
            ),
    )
    .service(
        web::scope("/api/v1/prerequisites")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_prerequisites))
                    .route(web::post().to(create_prerequisite).wrap(admin_only())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_prerequisite))
                    .route(web::put().to(update_prerequisite).wrap(admin_only()))
                    .route(web::delete().to(delete_prerequisite).wrap(admin_only())),
            ),
    );
}
