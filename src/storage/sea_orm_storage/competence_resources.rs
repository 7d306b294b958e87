use super::SeaOrmStorage;
use crate::entity::competence_resources::{ActiveModel, Column, Entity as CompetenceResources};
use crate::errors::{Result, SkillFlowError};
use crate::models::competences::{
    entities::CompetenceResource, requests::CompetenceResourceRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_competence_resource_impl(
        &self,
        req: CompetenceResourceRequest,
    ) -> Result<CompetenceResource> {
        let model = ActiveModel {
            competence_id: Set(req.competence_id),
            title: Set(req.title),
            url: Set(req.url),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("创建能力资源失败: {e}")))?;

        Ok(result.into_resource())
    }

    pub async fn get_competence_resource_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<CompetenceResource>> {
        let result = CompetenceResources::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询能力资源失败: {e}")))?;

        Ok(result.map(|m| m.into_resource()))
    }

    pub async fn list_competence_resources_impl(
        &self,
        competence_id: Option<i64>,
    ) -> Result<Vec<CompetenceResource>> {
        let mut select = CompetenceResources::find();
        if let Some(competence_id) = competence_id {
            select = select.filter(Column::CompetenceId.eq(competence_id));
        }

        let results = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                SkillFlowError::database_operation(format!("查询能力资源列表失败: {e}"))
            })?;

        Ok(results.into_iter().map(|m| m.into_resource()).collect())
    }

    pub async fn update_competence_resource_impl(
        &self,
        id: i64,
        req: CompetenceResourceRequest,
    ) -> Result<Option<CompetenceResource>> {
        let Some(existing) = CompetenceResources::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询能力资源失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.competence_id = Set(req.competence_id);
        model.title = Set(req.title);
        model.url = Set(req.url);

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("更新能力资源失败: {e}")))?;

        Ok(Some(updated.into_resource()))
    }

    pub async fn delete_competence_resource_impl(&self, id: i64) -> Result<bool> {
        let result = CompetenceResources::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("删除能力资源失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
