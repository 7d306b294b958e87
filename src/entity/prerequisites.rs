//! 能力先修关系实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "prerequisites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub source_id: i64,
    pub target_id: i64,
    pub prerequisite_type: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::competences::Entity",
        from = "Column::SourceId",
        to = "super::competences::Column::Id"
    )]
    Source,
    #[sea_orm(
        belongs_to = "super::competences::Entity",
        from = "Column::TargetId",
        to = "super::competences::Column::Id"
    )]
    Target,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_prerequisite(self) -> crate::models::competences::entities::Prerequisite {
        crate::models::competences::entities::Prerequisite {
            id: self.id,
            source_id: self.source_id,
            target_id: self.target_id,
            prerequisite_type: self.prerequisite_type.and_then(|t| t.parse().ok()),
        }
    }
}
