//! 能力存储操作

use super::SeaOrmStorage;
use crate::entity::competences::{ActiveModel, Column, Entity as Competences};
use crate::errors::{Result, SkillFlowError};
use crate::models::competences::{entities::Competence, requests::CompetenceRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建能力
    pub async fn create_competence_impl(&self, req: CompetenceRequest) -> Result<Competence> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            code: Set(req.code),
            name: Set(req.name),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("创建能力失败: {e}")))?;

        Ok(result.into_competence())
    }

    /// 通过 ID 获取能力
    pub async fn get_competence_by_id_impl(&self, id: i64) -> Result<Option<Competence>> {
        let result = Competences::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询能力失败: {e}")))?;

        Ok(result.map(|m| m.into_competence()))
    }

    /// 列出全部能力
    pub async fn list_competences_impl(&self) -> Result<Vec<Competence>> {
        let results = Competences::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询能力列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_competence()).collect())
    }

    /// 整体更新能力
    pub async fn update_competence_impl(
        &self,
        id: i64,
        req: CompetenceRequest,
    ) -> Result<Option<Competence>> {
        let Some(existing) = Competences::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询能力失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.code = Set(req.code);
        model.name = Set(req.name);
        model.description = Set(req.description);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("更新能力失败: {e}")))?;

        Ok(Some(updated.into_competence()))
    }

    /// 删除能力，子能力、等级、资源、先修关系和活动随外键级联删除
    pub async fn delete_competence_impl(&self, id: i64) -> Result<bool> {
        let result = Competences::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("删除能力失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
