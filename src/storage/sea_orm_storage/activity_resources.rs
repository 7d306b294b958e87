use super::SeaOrmStorage;
use crate::entity::activity_resources::{ActiveModel, Column, Entity as ActivityResources};
use crate::errors::{Result, SkillFlowError};
use crate::models::activities::{
    entities::ActivityResource,
    requests::{CreateActivityResourceRequest, UpdateActivityResourceRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_activity_resource_impl(
        &self,
        activity_id: i64,
        req: CreateActivityResourceRequest,
    ) -> Result<ActivityResource> {
        let model = ActiveModel {
            activity_id: Set(activity_id),
            title: Set(req.title),
            resource_type: Set(req.resource_type.to_string()),
            url: Set(req.url),
            description: Set(req.description),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("创建活动资源失败: {e}")))?;

        Ok(result.into_activity_resource())
    }

    pub async fn get_activity_resource_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<ActivityResource>> {
        let result = ActivityResources::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询活动资源失败: {e}")))?;

        Ok(result.map(|m| m.into_activity_resource()))
    }

    pub async fn list_activity_resources_impl(
        &self,
        activity_id: i64,
    ) -> Result<Vec<ActivityResource>> {
        let results = ActivityResources::find()
            .filter(Column::ActivityId.eq(activity_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                SkillFlowError::database_operation(format!("查询活动资源列表失败: {e}"))
            })?;

        Ok(results
            .into_iter()
            .map(|m| m.into_activity_resource())
            .collect())
    }

    /// title、resource_type 缺省时保持原值
    pub async fn update_activity_resource_impl(
        &self,
        id: i64,
        req: UpdateActivityResourceRequest,
    ) -> Result<Option<ActivityResource>> {
        let Some(existing) = ActivityResources::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询活动资源失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(title) = req.title {
            model.title = Set(title);
        }
        if let Some(resource_type) = req.resource_type {
            model.resource_type = Set(resource_type.to_string());
        }
        model.url = Set(req.url);
        model.description = Set(req.description);

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("更新活动资源失败: {e}")))?;

        Ok(Some(updated.into_activity_resource()))
    }

    pub async fn delete_activity_resource_impl(&self, id: i64) -> Result<bool> {
        let result = ActivityResources::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("删除活动资源失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
