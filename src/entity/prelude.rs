//! 预导入模块，方便使用

pub use super::activities::{
    ActiveModel as ActivityActiveModel, Entity as Activities, Model as ActivityModel,
};
pub use super::activity_resources::{
    ActiveModel as ActivityResourceActiveModel, Entity as ActivityResources,
    Model as ActivityResourceModel,
};
pub use super::competence_resources::{
    ActiveModel as CompetenceResourceActiveModel, Entity as CompetenceResources,
    Model as CompetenceResourceModel,
};
pub use super::competences::{
    ActiveModel as CompetenceActiveModel, Entity as Competences, Model as CompetenceModel,
};
pub use super::evaluation_questions::{
    ActiveModel as QuestionActiveModel, Entity as EvaluationQuestions, Model as QuestionModel,
};
pub use super::evaluations::{
    ActiveModel as EvaluationActiveModel, Entity as Evaluations, Model as EvaluationModel,
};
pub use super::levels::{ActiveModel as LevelActiveModel, Entity as Levels, Model as LevelModel};
pub use super::prerequisites::{
    ActiveModel as PrerequisiteActiveModel, Entity as Prerequisites, Model as PrerequisiteModel,
};
pub use super::student_answers::{
    ActiveModel as StudentAnswerActiveModel, Entity as StudentAnswers,
    Model as StudentAnswerModel,
};
pub use super::student_evaluations::{
    ActiveModel as SubmissionActiveModel, Entity as StudentEvaluations, Model as SubmissionModel,
};
pub use super::sub_competences::{
    ActiveModel as SubCompetenceActiveModel, Entity as SubCompetences,
    Model as SubCompetenceModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
