//! 能力实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "competences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub code: String,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sub_competences::Entity")]
    SubCompetences,
    #[sea_orm(has_many = "super::levels::Entity")]
    Levels,
    #[sea_orm(has_many = "super::competence_resources::Entity")]
    Resources,
    #[sea_orm(has_many = "super::activities::Entity")]
    Activities,
}

impl Related<super::sub_competences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubCompetences.def()
    }
}

impl Related<super::levels::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Levels.def()
    }
}

impl Related<super::competence_resources::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resources.def()
    }
}

impl Related<super::activities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_competence(self) -> crate::models::competences::entities::Competence {
        use crate::models::competences::entities::Competence;
        use chrono::{DateTime, Utc};

        Competence {
            id: self.id,
            code: self.code,
            name: self.name,
            description: self.description,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
