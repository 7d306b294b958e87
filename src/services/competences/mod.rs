//! 能力体系：能力、子能力、等级、资源与先修关系
//!
//! 读接口对所有登录用户开放，写接口仅管理员可用（由路由层的 RequireRole 保证）。

pub mod competence;
pub mod levels;
pub mod prerequisites;
pub mod resources;
pub mod sub_competences;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::competences::requests::{
    CompetenceRequest, CompetenceResourceRequest, LevelRequest, PrerequisiteRequest,
    SubCompetenceRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct CompetenceService {
    storage: Option<Arc<dyn Storage>>,
}

impl CompetenceService {
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

    // 能力
    pub async fn create_competence(
        &self,
        request: &HttpRequest,
        req: CompetenceRequest,
    ) -> ActixResult<HttpResponse> {
        competence::create_competence(self, request, req).await
    }

    pub async fn list_competences(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        competence::list_competences(self, request).await
    }

    pub async fn get_competence(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        competence::get_competence(self, request, id).await
    }

    pub async fn update_competence(
        &self,
        request: &HttpRequest,
        id: i64,
        req: CompetenceRequest,
    ) -> ActixResult<HttpResponse> {
        competence::update_competence(self, request, id, req).await
    }

    pub async fn delete_competence(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        competence::delete_competence(self, request, id).await
    }

    // 子能力
    pub async fn create_sub_competence(
        &self,
        request: &HttpRequest,
        req: SubCompetenceRequest,
    ) -> ActixResult<HttpResponse> {
        sub_competences::create_sub_competence(self, request, req).await
    }

    pub async fn list_sub_competences(
        &self,
        request: &HttpRequest,
        competence_id: Option<i64>,
    ) -> ActixResult<HttpResponse> {
        sub_competences::list_sub_competences(self, request, competence_id).await
    }

    pub async fn get_sub_competence(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        sub_competences::get_sub_competence(self, request, id).await
    }

    pub async fn update_sub_competence(
        &self,
        request: &HttpRequest,
        id: i64,
        req: SubCompetenceRequest,
    ) -> ActixResult<HttpResponse> {
        sub_competences::update_sub_competence(self, request, id, req).await
    }

    pub async fn delete_sub_competence(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        sub_competences::delete_sub_competence(self, request, id).await
    }

    // 等级
    pub async fn create_level(
        &self,
        request: &HttpRequest,
        req: LevelRequest,
    ) -> ActixResult<HttpResponse> {
        levels::create_level(self, request, req).await
    }

    pub async fn list_levels(
        &self,
        request: &HttpRequest,
        competence_id: Option<i64>,
    ) -> ActixResult<HttpResponse> {
        levels::list_levels(self, request, competence_id).await
    }

    pub async fn get_level(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        levels::get_level(self, request, id).await
    }

    pub async fn update_level(
        &self,
        request: &HttpRequest,
        id: i64,
        req: LevelRequest,
    ) -> ActixResult<HttpResponse> {
        levels::update_level(self, request, id, req).await
    }

    pub async fn delete_level(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        levels::delete_level(self, request, id).await
    }

    // 能力资源
    pub async fn create_resource(
        &self,
        request: &HttpRequest,
        req: CompetenceResourceRequest,
    ) -> ActixResult<HttpResponse> {
        resources::create_resource(self, request, req).await
    }

    pub async fn list_resources(
        &self,
        request: &HttpRequest,
        competence_id: Option<i64>,
    ) -> ActixResult<HttpResponse> {
        resources::list_resources(self, request, competence_id).await
    }

    pub async fn get_resource(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        resources::get_resource(self, request, id).await
    }

    pub async fn update_resource(
        &self,
        request: &HttpRequest,
        id: i64,
        req: CompetenceResourceRequest,
    ) -> ActixResult<HttpResponse> {
        resources::update_resource(self, request, id, req).await
    }

    pub async fn delete_resource(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        resources::delete_resource(self, request, id).await
    }

    // 先修关系
    pub async fn create_prerequisite(
        &self,
        request: &HttpRequest,
        req: PrerequisiteRequest,
    ) -> ActixResult<HttpResponse> {
        prerequisites::create_prerequisite(self, request, req).await
    }

    pub async fn list_prerequisites(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        prerequisites::list_prerequisites(self, request).await
    }

    pub async fn get_prerequisite(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        prerequisites::get_prerequisite(self, request, id).await
    }

    pub async fn update_prerequisite(
        &self,
        request: &HttpRequest,
        id: i64,
        req: PrerequisiteRequest,
    ) -> ActixResult<HttpResponse> {
        prerequisites::update_prerequisite(self, request, id, req).await
    }

    pub async fn delete_prerequisite(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        prerequisites::delete_prerequisite(self, request, id).await
    }
}

/// 子表写入前确认所属能力存在
pub(crate) async fn ensure_competence_exists(
    storage: &Arc<dyn Storage>,
    competence_id: i64,
) -> Result<(), HttpResponse> {
    match storage.get_competence_by_id(competence_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CompetenceNotFound,
            format!("Competence {competence_id} not found"),
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to load competence: {e}"),
            )),
        ),
    }
}
