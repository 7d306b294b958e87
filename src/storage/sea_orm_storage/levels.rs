use super::SeaOrmStorage;
use crate::entity::levels::{ActiveModel, Column, Entity as Levels};
use crate::errors::{Result, SkillFlowError};
use crate::models::competences::{entities::Level, requests::LevelRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_level_impl(&self, req: LevelRequest) -> Result<Level> {
        let model = ActiveModel {
            competence_id: Set(req.competence_id),
            level_type: Set(req.level_type.to_string()),
            label: Set(req.label),
            description: Set(req.description),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("创建等级失败: {e}")))?;

        Ok(result.into_level())
    }

    pub async fn get_level_by_id_impl(&self, id: i64) -> Result<Option<Level>> {
        let result = Levels::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询等级失败: {e}")))?;

        Ok(result.map(|m| m.into_level()))
    }

    pub async fn list_levels_impl(&self, competence_id: Option<i64>) -> Result<Vec<Level>> {
        let mut select = Levels::find();
        if let Some(competence_id) = competence_id {
            select = select.filter(Column::CompetenceId.eq(competence_id));
        }

        let results = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询等级列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_level()).collect())
    }

    pub async fn update_level_impl(&self, id: i64, req: LevelRequest) -> Result<Option<Level>> {
        let Some(existing) = Levels::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询等级失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.competence_id = Set(req.competence_id);
        model.level_type = Set(req.level_type.to_string());
        model.label = Set(req.label);
        model.description = Set(req.description);

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("更新等级失败: {e}")))?;

        Ok(Some(updated.into_level()))
    }

    pub async fn delete_level_impl(&self, id: i64) -> Result<bool> {
        let result = Levels::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("删除等级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
