//! 测评实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub activity_id: i64,
    pub title: String,
    pub prerequisite_level: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub introduction: Option<String>,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::activities::Entity",
        from = "Column::ActivityId",
        to = "super::activities::Column::Id"
    )]
    Activity,
    #[sea_orm(has_many = "super::evaluation_questions::Entity")]
    Questions,
    #[sea_orm(has_many = "super::student_evaluations::Entity")]
    Submissions,
}

impl Related<super::activities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activity.def()
    }
}

impl Related<super::evaluation_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Questions.def()
    }
}

impl Related<super::student_evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_evaluation(self) -> crate::models::evaluations::entities::Evaluation {
        use crate::models::evaluations::entities::{
            Evaluation, EvaluationStatus, PrerequisiteLevel,
        };
        use chrono::{DateTime, Utc};

        Evaluation {
            id: self.id,
            activity_id: self.activity_id,
            title: self.title,
            prerequisite_level: self
                .prerequisite_level
                .parse()
                .unwrap_or(PrerequisiteLevel::Beginner),
            introduction: self.introduction,
            status: self.status.parse().unwrap_or(EvaluationStatus::Draft),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
