//! 测评与题目存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::evaluation_questions::{
    ActiveModel as QuestionActiveModel, Column as QuestionColumn, Entity as EvaluationQuestions,
};
use crate::entity::evaluations::{ActiveModel, Column, Entity as Evaluations};
use crate::errors::{Result, SkillFlowError};
use crate::models::evaluations::{
    entities::{Evaluation, EvaluationStatus, Question},
    requests::EvaluationRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建测评（草稿）
    pub async fn create_evaluation_impl(&self, req: EvaluationRequest) -> Result<Evaluation> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            activity_id: Set(req.activity_id),
            title: Set(req.title),
            prerequisite_level: Set(req.prerequisite_level.to_string()),
            introduction: Set(req.introduction),
            status: Set(EvaluationStatus::Draft.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("创建测评失败: {e}")))?;

        Ok(result.into_evaluation())
    }

    /// 通过 ID 获取测评
    pub async fn get_evaluation_by_id_impl(&self, id: i64) -> Result<Option<Evaluation>> {
        let result = Evaluations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询测评失败: {e}")))?;

        Ok(result.map(|m| m.into_evaluation()))
    }

    /// 列出测评，新建的在前
    pub async fn list_evaluations_impl(
        &self,
        status: Option<EvaluationStatus>,
    ) -> Result<Vec<Evaluation>> {
        let mut select = Evaluations::find();
        if let Some(status) = status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        let results = select
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询测评列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_evaluation()).collect())
    }

    /// 更新测评内容，状态保持不变
    pub async fn update_evaluation_impl(
        &self,
        id: i64,
        req: EvaluationRequest,
    ) -> Result<Option<Evaluation>> {
        let Some(existing) = Evaluations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询测评失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.activity_id = Set(req.activity_id);
        model.title = Set(req.title);
        model.prerequisite_level = Set(req.prerequisite_level.to_string());
        model.introduction = Set(req.introduction);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("更新测评失败: {e}")))?;

        Ok(Some(updated.into_evaluation()))
    }

    /// 设置发布状态
    pub async fn set_evaluation_status_impl(
        &self,
        id: i64,
        status: EvaluationStatus,
    ) -> Result<Option<Evaluation>> {
        let Some(existing) = Evaluations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询测评失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.status = Set(status.to_string());
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("更新测评状态失败: {e}")))?;

        Ok(Some(updated.into_evaluation()))
    }

    /// 删除测评
    pub async fn delete_evaluation_impl(&self, id: i64) -> Result<bool> {
        let result = Evaluations::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("删除测评失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 各测评的题目数
    pub async fn count_questions_grouped_impl(&self) -> Result<HashMap<i64, u64>> {
        let evaluation_ids = EvaluationQuestions::find()
            .select_only()
            .column(QuestionColumn::EvaluationId)
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("统计题目数量失败: {e}")))?;

        let mut counts = HashMap::new();
        for evaluation_id in evaluation_ids {
            *counts.entry(evaluation_id).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// 单个测评的题目数
    pub async fn count_questions_impl(&self, evaluation_id: i64) -> Result<u64> {
        EvaluationQuestions::find()
            .filter(QuestionColumn::EvaluationId.eq(evaluation_id))
            .count(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("统计题目数量失败: {e}")))
    }

    /// 追加题目，position 为当前题数 + 1
    pub async fn create_question_impl(
        &self,
        evaluation_id: i64,
        label: String,
        options: Vec<String>,
        correct_answer: String,
    ) -> Result<Question> {
        let position = self.count_questions_impl(evaluation_id).await? as i32 + 1;
        let options_json = serde_json::to_string(&options)?;

        let model = QuestionActiveModel {
            evaluation_id: Set(evaluation_id),
            label: Set(label),
            options_json: Set(options_json),
            correct_answer: Set(correct_answer),
            position: Set(position),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("创建题目失败: {e}")))?;

        Ok(result.into_question())
    }

    /// 按顺序列出题目
    pub async fn list_questions_impl(&self, evaluation_id: i64) -> Result<Vec<Question>> {
        let results = EvaluationQuestions::find()
            .filter(QuestionColumn::EvaluationId.eq(evaluation_id))
            .order_by_asc(QuestionColumn::Position)
            .order_by_asc(QuestionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询题目列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_question()).collect())
    }
}
