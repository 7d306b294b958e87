//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! 枚举字段以字符串存储，读取时解析失败会回退到默认值。

pub mod prelude;

pub mod activities;
pub mod activity_resources;
pub mod competence_resources;
pub mod competences;
pub mod evaluation_questions;
pub mod evaluations;
pub mod levels;
pub mod prerequisites;
pub mod student_answers;
pub mod student_evaluations;
pub mod sub_competences;
pub mod users;
