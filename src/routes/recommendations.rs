use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::recommendations::requests::RecommendationQuery;
use crate::services::RecommendationService;
use crate::utils::SafeStudentIdI64;

// 懒加载的全局 RecommendationService 实例
static RECOMMENDATION_SERVICE: Lazy<RecommendationService> =
    Lazy::new(RecommendationService::new_lazy);

pub async fn recommend_for_student(
    req: HttpRequest,
    path: SafeStudentIdI64,
    query: web::Query<RecommendationQuery>,
) -> ActixResult<HttpResponse> {
    RECOMMENDATION_SERVICE
        .recommend_for_student(&req, path.0, query.into_inner())
        .await
}

// 配置路由
pub fn configure_recommendation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/recommendations")
            .wrap(middlewares::RequireJWT)
            .route(
                "/student/{student_id}",
                web::get().to(recommend_for_student),
            ),
    );
}
