//! 学生作答存储操作

use super::SeaOrmStorage;
use crate::entity::student_answers::{
    ActiveModel as AnswerActiveModel, Column as AnswerColumn, Entity as StudentAnswers,
};
use crate::entity::student_evaluations::{ActiveModel, Column, Entity as StudentEvaluations};
use crate::errors::{Result, SkillFlowError};
use crate::models::submissions::entities::{
    GradedAnswer, NewSubmission, SaveOutcome, StudentAnswer, Submission, SubmissionStatus,
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 开始作答：存在未提交的作答时直接复用
    pub async fn start_or_resume_submission_impl(&self, new: NewSubmission) -> Result<Submission> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = StudentEvaluations::find()
            .filter(Column::EvaluationId.eq(new.evaluation_id))
            .filter(Column::StudentId.eq(new.student_id))
            .filter(Column::Status.eq(SubmissionStatus::InProgress.to_string()))
            .order_by_desc(Column::StartedAt)
            .order_by_desc(Column::Id)
            .one(&txn)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询作答失败: {e}")))?;

        let submission = match existing {
            Some(model) => model,
            None => ActiveModel {
                evaluation_id: Set(new.evaluation_id),
                activity_id: Set(new.activity_id),
                prerequisite_level: Set(new.prerequisite_level.to_string()),
                student_id: Set(new.student_id),
                student_full_name: Set(new.student_full_name),
                student_level: Set(new.student_level),
                score: Set(None),
                status: Set(SubmissionStatus::InProgress.to_string()),
                started_at: Set(chrono::Utc::now().timestamp()),
                submitted_at: Set(None),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("创建作答失败: {e}")))?,
        };

        txn.commit()
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(submission.into_submission())
    }

    /// 通过 ID 获取作答
    pub async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let result = StudentEvaluations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询作答失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 列出作答
    pub async fn list_submissions_impl(
        &self,
        evaluation_id: Option<i64>,
        student_id: Option<i64>,
    ) -> Result<Vec<Submission>> {
        let mut select = StudentEvaluations::find();
        if let Some(evaluation_id) = evaluation_id {
            select = select.filter(Column::EvaluationId.eq(evaluation_id));
        }
        if let Some(student_id) = student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        let results = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询作答列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 保存判分结果：替换全部答案并把作答标记为已提交
    ///
    /// 状态切换以 `status = in_progress` 为条件，并发提交时只有一个能成功。
    pub async fn save_submission_result_impl(
        &self,
        submission_id: i64,
        answers: Vec<GradedAnswer>,
        score: i32,
    ) -> Result<SaveOutcome> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("开启事务失败: {e}")))?;

        let marked = StudentEvaluations::update_many()
            .col_expr(Column::Score, Expr::value(Some(score)))
            .col_expr(
                Column::Status,
                Expr::value(SubmissionStatus::Submitted.to_string()),
            )
            .col_expr(
                Column::SubmittedAt,
                Expr::value(Some(chrono::Utc::now().timestamp())),
            )
            .filter(Column::Id.eq(submission_id))
            .filter(Column::Status.eq(SubmissionStatus::InProgress.to_string()))
            .exec(&txn)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("更新作答失败: {e}")))?;

        // 未更新任何行：记录不存在或已提交，事务随 txn 丢弃回滚
        if marked.rows_affected == 0 {
            let exists = StudentEvaluations::find_by_id(submission_id)
                .one(&txn)
                .await
                .map_err(|e| SkillFlowError::database_operation(format!("查询作答失败: {e}")))?
                .is_some();
            return Ok(if exists {
                SaveOutcome::AlreadySubmitted
            } else {
                SaveOutcome::NotFound
            });
        }

        StudentAnswers::delete_many()
            .filter(AnswerColumn::SubmissionId.eq(submission_id))
            .exec(&txn)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("清理旧答案失败: {e}")))?;

        if !answers.is_empty() {
            let models = answers.into_iter().map(|answer| AnswerActiveModel {
                submission_id: Set(submission_id),
                question_id: Set(answer.question_id),
                chosen_answer: Set(answer.chosen_answer),
                correct: Set(answer.correct),
                ..Default::default()
            });
            StudentAnswers::insert_many(models)
                .exec(&txn)
                .await
                .map_err(|e| SkillFlowError::database_operation(format!("保存答案失败: {e}")))?;
        }

        let updated = StudentEvaluations::find_by_id(submission_id)
            .one(&txn)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询作答失败: {e}")))?
            .ok_or_else(|| SkillFlowError::database_operation("作答在事务中丢失".to_string()))?;

        txn.commit()
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(SaveOutcome::Saved(updated.into_submission()))
    }

    /// 列出某次作答的答案
    pub async fn list_answers_impl(&self, submission_id: i64) -> Result<Vec<StudentAnswer>> {
        let results = StudentAnswers::find()
            .filter(AnswerColumn::SubmissionId.eq(submission_id))
            .order_by_asc(AnswerColumn::QuestionId)
            .order_by_asc(AnswerColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("查询答案失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_answer()).collect())
    }
}
