use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::evaluations::requests::{
    CreateQuestionRequest, EvaluationRequest, PublishRequest, StartEvaluationRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::{EvaluationService, SubmissionService};
use crate::utils::SafeIDI64;

// 懒加载的全局 EvaluationService 实例
static EVALUATION_SERVICE: Lazy<EvaluationService> = Lazy::new(EvaluationService::new_lazy);
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

pub async fn list_evaluations(req: HttpRequest) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.list_evaluations(&req).await
}

pub async fn list_published(req: HttpRequest) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.list_published(&req).await
}

pub async fn create_evaluation(
    req: HttpRequest,
    data: web::Json<EvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .create_evaluation(&req, data.into_inner())
        .await
}

pub async fn get_evaluation(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.get_evaluation(&req, path.0).await
}

pub async fn update_evaluation(
    req: HttpRequest,
    path: SafeIDI64,
    data: web::Json<EvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .update_evaluation(&req, path.0, data.into_inner())
        .await
}

pub async fn delete_evaluation(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.delete_evaluation(&req, path.0).await
}

pub async fn publish_evaluation(
    req: HttpRequest,
    path: SafeIDI64,
    data: web::Json<PublishRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .publish_evaluation(&req, path.0, data.into_inner())
        .await
}

pub async fn add_question(
    req: HttpRequest,
    path: SafeIDI64,
    data: web::Json<CreateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .add_question(&req, path.0, data.into_inner())
        .await
}

pub async fn list_questions_for_admin(
    req: HttpRequest,
    path: SafeIDI64,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .list_questions_for_admin(&req, path.0)
        .await
}

pub async fn list_questions_for_student(
    req: HttpRequest,
    path: SafeIDI64,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .list_questions_for_student(&req, path.0)
        .await
}

pub async fn list_evaluation_submissions(
    req: HttpRequest,
    path: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.list_for_evaluation(&req, path.0).await
}

// 请求体可省略
pub async fn start_evaluation(
    req: HttpRequest,
    path: SafeIDI64,
    data: Option<web::Json<StartEvaluationRequest>>,
) -> ActixResult<HttpResponse> {
    let data = data.map(|d| d.into_inner()).unwrap_or_default();
    EVALUATION_SERVICE
        .start_evaluation(&req, path.0, data)
        .await
}

// 配置路由
pub fn configure_evaluation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/evaluations")
            .wrap(middlewares::RequireJWT)
            // 学生
            .route("/published", web::get().to(list_published))
            .route(
                "/{id}/questions/student",
                web::get().to(list_questions_for_student),
            )
            .route(
                "/{id}/start",
                web::post()
                    .to(start_evaluation)
                    .wrap(middlewares::RequireRole::new(&UserRole::Student)),
            )
            // 管理员
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::get().to(list_evaluations))
                    .route("", web::post().to(create_evaluation))
                    .route("/{id}/publish", web::put().to(publish_evaluation))
                    .route("/{id}/questions", web::post().to(add_question))
                    .route("/{id}/questions/prof", web::get().to(list_questions_for_admin))
                    .route(
                        "/{id}/submissions",
                        web::get().to(list_evaluation_submissions),
                    )
                    .route("/{id}", web::get().to(get_evaluation))
                    .route("/{id}", web::put().to(update_evaluation))
                    .route("/{id}", web::delete().to(delete_evaluation)),
            ),
    );
}
