use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::AnalyticsService;

// 懒加载的全局 AnalyticsService 实例
static ANALYTICS_SERVICE: Lazy<AnalyticsService> = Lazy::new(AnalyticsService::new_lazy);

pub async fn dashboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE.get_dashboard(&req).await
}

pub async fn health(req: HttpRequest) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE.health(&req).await
}

// 配置路由
pub fn configure_graphes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/graphes")
            .route("/health", web::get().to(health))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route("/dashboard", web::get().to(dashboard)),
            ),
    );
}
