use super::SeaOrmStorage;
use crate::entity::prerequisites::{ActiveModel, Column, Entity as Prerequisites};
use crate::errors::{Result, SkillFlowError};
use crate::models::competences::{entities::Prerequisite, requests::PrerequisiteRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_prerequisite_impl(&self, req: PrerequisiteRequest) -> Result<Prerequisite> {
        let model = ActiveModel {
            source_id: Set(req.source_id),
            target_id: Set(req.target_id),
            prerequisite_type: Set(req.prerequisite_type.map(|t| t.to_string())),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("创建先修关系失败: {e}")))?;

        Ok(result.into_prerequisite())
    }

    pub async fn get_prerequisite_by_id_impl(&self, id: i64) -> Result<Option<Prerequisite>> {
        let result = Prerequisites::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询先修关系失败: {e}")))?;

        Ok(result.map(|m| m.into_prerequisite()))
    }

    pub async fn list_prerequisites_impl(&self) -> Result<Vec<Prerequisite>> {
        let results = Prerequisites::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                SkillFlowError::database_operation(format!("查询先修关系列表失败: {e}"))
            })?;

        Ok(results.into_iter().map(|m| m.into_prerequisite()).collect())
    }

    pub async fn update_prerequisite_impl(
        &self,
        id: i64,
        req: PrerequisiteRequest,
    ) -> Result<Option<Prerequisite>> {
        let Some(existing) = Prerequisites::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询先修关系失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.source_id = Set(req.source_id);
        model.target_id = Set(req.target_id);
        model.prerequisite_type = Set(req.prerequisite_type.map(|t| t.to_string()));

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("更新先修关系失败: {e}")))?;

        Ok(Some(updated.into_prerequisite()))
    }

    pub async fn delete_prerequisite_impl(&self, id: i64) -> Result<bool> {
        let result = Prerequisites::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("删除先修关系失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
