//! 学生答案实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_answers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub submission_id: i64,
    pub question_id: i64,
    pub chosen_answer: String,
    pub correct: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_evaluations::Entity",
        from = "Column::SubmissionId",
        to = "super::student_evaluations::Column::Id"
    )]
    Submission,
}

impl Related<super::student_evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_answer(self) -> crate::models::submissions::entities::StudentAnswer {
        crate::models::submissions::entities::StudentAnswer {
            id: self.id,
            submission_id: self.submission_id,
            question_id: self.question_id,
            chosen_answer: self.chosen_answer,
            correct: self.correct,
        }
    }
}
