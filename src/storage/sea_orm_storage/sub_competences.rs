use super::SeaOrmStorage;
use crate::entity::sub_competences::{ActiveModel, Column, Entity as SubCompetences};
use crate::errors::{Result, SkillFlowError};
use crate::models::competences::{entities::SubCompetence, requests::SubCompetenceRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_sub_competence_impl(
        &self,
        req: SubCompetenceRequest,
    ) -> Result<SubCompetence> {
        let model = ActiveModel {
            competence_id: Set(req.competence_id),
            name: Set(req.name),
            description: Set(req.description),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("创建子能力失败: {e}")))?;

        Ok(result.into_sub_competence())
    }

    pub async fn get_sub_competence_by_id_impl(&self, id: i64) -> Result<Option<SubCompetence>> {
        let result = SubCompetences::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询子能力失败: {e}")))?;

        Ok(result.map(|m| m.into_sub_competence()))
    }

    pub async fn list_sub_competences_impl(
        &self,
        competence_id: Option<i64>,
    ) -> Result<Vec<SubCompetence>> {
        let mut select = SubCompetences::find();
        if let Some(competence_id) = competence_id {
            select = select.filter(Column::CompetenceId.eq(competence_id));
        }

        let results = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                SkillFlowError::database_operation(format!("查询子能力列表失败: {e}"))
            })?;

        Ok(results.into_iter().map(|m| m.into_sub_competence()).collect())
    }

    pub async fn update_sub_competence_impl(
        &self,
        id: i64,
        req: SubCompetenceRequest,
    ) -> Result<Option<SubCompetence>> {
        let Some(existing) = SubCompetences::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询子能力失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.competence_id = Set(req.competence_id);
        model.name = Set(req.name);
        model.description = Set(req.description);

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("更新子能力失败: {e}")))?;

        Ok(Some(updated.into_sub_competence()))
    }

    pub async fn delete_sub_competence_impl(&self, id: i64) -> Result<bool> {
        let result = SubCompetences::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("删除子能力失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
