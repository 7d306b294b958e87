//! 学习活动存储操作

use super::SeaOrmStorage;
use crate::entity::activities::{ActiveModel, Column, Entity as Activities};
use crate::errors::{Result, SkillFlowError};
use crate::models::activities::{entities::Activity, requests::ActivityRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建活动
    pub async fn create_activity_impl(&self, req: ActivityRequest) -> Result<Activity> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            competence_id: Set(req.competence_id),
            title: Set(req.title),
            description: Set(req.description),
            activity_type: Set(req.activity_type.to_string()),
            duration: Set(req.duration),
            level: Set(req.level.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("创建活动失败: {e}")))?;

        Ok(result.into_activity())
    }

    /// 通过 ID 获取活动
    pub async fn get_activity_by_id_impl(&self, id: i64) -> Result<Option<Activity>> {
        let result = Activities::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询活动失败: {e}")))?;

        Ok(result.map(|m| m.into_activity()))
    }

    /// 列出活动，可按能力过滤
    pub async fn list_activities_impl(&self, competence_id: Option<i64>) -> Result<Vec<Activity>> {
        let mut select = Activities::find();
        if let Some(competence_id) = competence_id {
            select = select.filter(Column::CompetenceId.eq(competence_id));
        }

        let results = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询活动列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_activity()).collect())
    }

    /// 整体更新活动
    pub async fn update_activity_impl(
        &self,
        id: i64,
        req: ActivityRequest,
    ) -> Result<Option<Activity>> {
        let Some(existing) = Activities::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询活动失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.competence_id = Set(req.competence_id);
        model.title = Set(req.title);
        model.description = Set(req.description);
        model.activity_type = Set(req.activity_type.to_string());
        model.duration = Set(req.duration);
        model.level = Set(req.level.to_string());
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("更新活动失败: {e}")))?;

        Ok(Some(updated.into_activity()))
    }

    /// 删除活动，资源和测评随外键级联删除
    pub async fn delete_activity_impl(&self, id: i64) -> Result<bool> {
        let result = Activities::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("删除活动失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
