//! 测评：管理员维护测评与题目，学生查看已发布测评并开始作答

pub mod manage;
pub mod questions;
pub mod scoring;
pub mod start;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::evaluations::{
    entities::{Evaluation, EvaluationStatus},
    requests::{CreateQuestionRequest, EvaluationRequest, PublishRequest, StartEvaluationRequest},
};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct EvaluationService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create_evaluation(
        &self,
        request: &HttpRequest,
        req: EvaluationRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_evaluation(self, request, req).await
    }

    // 全部测评，附带题目数量
    pub async fn list_evaluations(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        manage::list_evaluations(self, request, None).await
    }

    // 学生可见的已发布测评
    pub async fn list_published(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        manage::list_evaluations(self, request, Some(EvaluationStatus::Published)).await
    }

    pub async fn get_evaluation(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        manage::get_evaluation(self, request, id).await
    }

    pub async fn update_evaluation(
        &self,
        request: &HttpRequest,
        id: i64,
        req: EvaluationRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_evaluation(self, request, id, req).await
    }

    pub async fn delete_evaluation(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        manage::delete_evaluation(self, request, id).await
    }

    pub async fn publish_evaluation(
        &self,
        request: &HttpRequest,
        id: i64,
        req: PublishRequest,
    ) -> ActixResult<HttpResponse> {
        manage::publish_evaluation(self, request, id, req).await
    }

    pub async fn add_question(
        &self,
        request: &HttpRequest,
        id: i64,
        req: CreateQuestionRequest,
    ) -> ActixResult<HttpResponse> {
        questions::add_question(self, request, id, req).await
    }

    // 含正确答案
    pub async fn list_questions_for_admin(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        questions::list_questions_for_admin(self, request, id).await
    }

    pub async fn list_questions_for_student(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        questions::list_questions_for_student(self, request, id).await
    }

    pub async fn start_evaluation(
        &self,
        request: &HttpRequest,
        id: i64,
        req: StartEvaluationRequest,
    ) -> ActixResult<HttpResponse> {
        start::start_evaluation(self, request, id, req).await
    }
}

/// 读取测评，不存在时返回 404 响应
pub(crate) async fn load_evaluation(
    storage: &Arc<dyn Storage>,
    id: i64,
) -> Result<Evaluation, HttpResponse> {
    match storage.get_evaluation_by_id(id).await {
        Ok(Some(evaluation)) => Ok(evaluation),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EvaluationNotFound,
            "Evaluation not found",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get evaluation: {e}"),
            )),
        ),
    }
}
