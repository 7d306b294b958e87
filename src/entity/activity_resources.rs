//! 活动资源实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "activity_resources")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub activity_id: i64,
    pub title: String,
    pub resource_type: String,
    pub url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::activities::Entity",
        from = "Column::ActivityId",
        to = "super::activities::Column::Id"
    )]
    Activity,
}

impl Related<super::activities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_activity_resource(self) -> crate::models::activities::entities::ActivityResource {
        use crate::models::activities::entities::{ActivityResource, ResourceType};

        ActivityResource {
            id: self.id,
            activity_id: self.activity_id,
            title: self.title,
            resource_type: self.resource_type.parse().unwrap_or(ResourceType::Link),
            url: self.url,
            description: self.description,
        }
    }
}
