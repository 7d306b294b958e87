//! 测评题目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluation_questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub evaluation_id: i64,
    #[sea_orm(column_type = "Text")]
    pub label: String,
    /// JSON 字符串数组
    #[sea_orm(column_type = "Text")]
    pub options_json: String,
    pub correct_answer: String,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::evaluations::Entity",
        from = "Column::EvaluationId",
        to = "super::evaluations::Column::Id"
    )]
    Evaluation,
}

impl Related<super::evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_question(self) -> crate::models::evaluations::entities::Question {
        crate::models::evaluations::entities::Question {
            id: self.id,
            evaluation_id: self.evaluation_id,
            label: self.label,
            // 列内容损坏时按无选项处理，不让整个请求失败
            options: serde_json::from_str(&self.options_json).unwrap_or_default(),
            correct_answer: self.correct_answer,
            position: self.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(options_json: &str) -> Model {
        Model {
            id: 1,
            evaluation_id: 1,
            label: "2 + 2 ?".to_string(),
            options_json: options_json.to_string(),
            correct_answer: "4".to_string(),
            position: 1,
        }
    }

    #[test]
    fn test_options_decoded_from_json() {
        let q = model(r#"["3","4"]"#).into_question();
        assert_eq!(q.options, vec!["3".to_string(), "4".to_string()]);
    }

    #[test]
    fn test_corrupt_options_decode_to_empty() {
        assert!(model("not json").into_question().options.is_empty());
        assert!(model(r#"{"a":1}"#).into_question().options.is_empty());
    }
}
