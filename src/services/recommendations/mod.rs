pub mod engine;
pub mod student;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::recommendations::requests::RecommendationQuery;
use crate::storage::Storage;

pub struct RecommendationService {
    storage: Option<Arc<dyn Storage>>,
}

impl RecommendationService {
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

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 学生只能查自己的推荐
    pub async fn recommend_for_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
        query: RecommendationQuery,
    ) -> ActixResult<HttpResponse> {
        student::recommend_for_student(self, request, student_id, query).await
    }
}
