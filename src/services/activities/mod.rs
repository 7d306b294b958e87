pub mod activity;
pub mod resources;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::activities::requests::{
    ActivityRequest, CreateActivityResourceRequest, UpdateActivityResourceRequest,
};
use crate::storage::Storage;

pub struct ActivityService {
    storage: Option<Arc<dyn Storage>>,
}

impl ActivityService {
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

    pub async fn create_activity(
        &self,
        request: &HttpRequest,
        req: ActivityRequest,
    ) -> ActixResult<HttpResponse> {
        activity::create_activity(self, request, req).await
    }

    // competence_id 为空时列出全部
    pub async fn list_activities(
        &self,
        request: &HttpRequest,
        competence_id: Option<i64>,
    ) -> ActixResult<HttpResponse> {
        activity::list_activities(self, request, competence_id).await
    }

    pub async fn get_activity(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        activity::get_activity(self, request, id).await
    }

    pub async fn update_activity(
        &self,
        request: &HttpRequest,
        id: i64,
        req: ActivityRequest,
    ) -> ActixResult<HttpResponse> {
        activity::update_activity(self, request, id, req).await
    }

    pub async fn delete_activity(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        activity::delete_activity(self, request, id).await
    }

    // 活动资源
    pub async fn list_resources(
        &self,
        request: &HttpRequest,
        activity_id: i64,
    ) -> ActixResult<HttpResponse> {
        resources::list_resources(self, request, activity_id).await
    }

    pub async fn create_resource(
        &self,
        request: &HttpRequest,
        activity_id: i64,
        req: CreateActivityResourceRequest,
    ) -> ActixResult<HttpResponse> {
        resources::create_resource(self, request, activity_id, req).await
    }

    pub async fn update_resource(
        &self,
        request: &HttpRequest,
        id: i64,
        req: UpdateActivityResourceRequest,
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
}
