use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{
    activities::{
        entities::{Activity, ActivityResource},
        requests::{ActivityRequest, CreateActivityResourceRequest, UpdateActivityResourceRequest},
    },
    competences::{
        entities::{Competence, CompetenceResource, Level, Prerequisite, SubCompetence},
        requests::{
            CompetenceRequest, CompetenceResourceRequest, LevelRequest, PrerequisiteRequest,
            SubCompetenceRequest,
        },
    },
    evaluations::{
        entities::{Evaluation, EvaluationStatus, Question},
        requests::EvaluationRequest,
    },
    submissions::entities::{
        GradedAnswer, NewSubmission, SaveOutcome, StudentAnswer, Submission,
    },
    users::{
        entities::{User, UserRole},
        requests::CreateUserRequest,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 用户总数
    async fn count_users(&self) -> Result<u64>;
    // 指定角色的用户数
    async fn count_users_by_role(&self, role: UserRole) -> Result<u64>;

    /// 能力管理方法
    async fn create_competence(&self, req: CompetenceRequest) -> Result<Competence>;
    async fn get_competence_by_id(&self, id: i64) -> Result<Option<Competence>>;
    async fn list_competences(&self) -> Result<Vec<Competence>>;
    async fn update_competence(&self, id: i64, req: CompetenceRequest)
    -> Result<Option<Competence>>;
    async fn delete_competence(&self, id: i64) -> Result<bool>;

    /// 子能力
    async fn create_sub_competence(&self, req: SubCompetenceRequest) -> Result<SubCompetence>;
    async fn get_sub_competence_by_id(&self, id: i64) -> Result<Option<SubCompetence>>;
    // competence_id 为空时列出全部
    async fn list_sub_competences(&self, competence_id: Option<i64>) -> Result<Vec<SubCompetence>>;
    async fn update_sub_competence(
        &self,
        id: i64,
        req: SubCompetenceRequest,
    ) -> Result<Option<SubCompetence>>;
    async fn delete_sub_competence(&self, id: i64) -> Result<bool>;

    /// 等级
    async fn create_level(&self, req: LevelRequest) -> Result<Level>;
    async fn get_level_by_id(&self, id: i64) -> Result<Option<Level>>;
    async fn list_levels(&self, competence_id: Option<i64>) -> Result<Vec<Level>>;
    async fn update_level(&self, id: i64, req: LevelRequest) -> Result<Option<Level>>;
    async fn delete_level(&self, id: i64) -> Result<bool>;

    /// 能力资源
    async fn create_competence_resource(
        &self,
        req: CompetenceResourceRequest,
    ) -> Result<CompetenceResource>;
    async fn get_competence_resource_by_id(&self, id: i64) -> Result<Option<CompetenceResource>>;
    async fn list_competence_resources(
        &self,
        competence_id: Option<i64>,
    ) -> Result<Vec<CompetenceResource>>;
    async fn update_competence_resource(
        &self,
        id: i64,
        req: CompetenceResourceRequest,
    ) -> Result<Option<CompetenceResource>>;
    async fn delete_competence_resource(&self, id: i64) -> Result<bool>;

    /// 先修关系
    async fn create_prerequisite(&self, req: PrerequisiteRequest) -> Result<Prerequisite>;
    async fn get_prerequisite_by_id(&self, id: i64) -> Result<Option<Prerequisite>>;
    async fn list_prerequisites(&self) -> Result<Vec<Prerequisite>>;
    async fn update_prerequisite(
        &self,
        id: i64,
        req: PrerequisiteRequest,
    ) -> Result<Option<Prerequisite>>;
    async fn delete_prerequisite(&self, id: i64) -> Result<bool>;

    /// 学习活动
    async fn create_activity(&self, req: ActivityRequest) -> Result<Activity>;
    async fn get_activity_by_id(&self, id: i64) -> Result<Option<Activity>>;
    // 按 id 升序
    async fn list_activities(&self, competence_id: Option<i64>) -> Result<Vec<Activity>>;
    async fn update_activity(&self, id: i64, req: ActivityRequest) -> Result<Option<Activity>>;
    async fn delete_activity(&self, id: i64) -> Result<bool>;

    /// 活动资源
    async fn create_activity_resource(
        &self,
        activity_id: i64,
        req: CreateActivityResourceRequest,
    ) -> Result<ActivityResource>;
    async fn get_activity_resource_by_id(&self, id: i64) -> Result<Option<ActivityResource>>;
    async fn list_activity_resources(&self, activity_id: i64) -> Result<Vec<ActivityResource>>;
    async fn update_activity_resource(
        &self,
        id: i64,
        req: UpdateActivityResourceRequest,
    ) -> Result<Option<ActivityResource>>;
    async fn delete_activity_resource(&self, id: i64) -> Result<bool>;

    /// 测评管理方法
    // 新建测评，状态为 draft
    async fn create_evaluation(&self, req: EvaluationRequest) -> Result<Evaluation>;
    async fn get_evaluation_by_id(&self, id: i64) -> Result<Option<Evaluation>>;
    // 按 id 降序
    async fn list_evaluations(&self, status: Option<EvaluationStatus>) -> Result<Vec<Evaluation>>;
    async fn update_evaluation(&self, id: i64, req: EvaluationRequest)
    -> Result<Option<Evaluation>>;
    async fn set_evaluation_status(
        &self,
        id: i64,
        status: EvaluationStatus,
    ) -> Result<Option<Evaluation>>;
    // 级联删除题目、作答和答案
    async fn delete_evaluation(&self, id: i64) -> Result<bool>;
    // evaluation_id -> 题目数
    async fn count_questions_grouped(&self) -> Result<HashMap<i64, u64>>;
    async fn count_questions(&self, evaluation_id: i64) -> Result<u64>;

    /// 题目
    // position 自动取当前题数 + 1
    async fn create_question(
        &self,
        evaluation_id: i64,
        label: String,
        options: Vec<String>,
        correct_answer: String,
    ) -> Result<Question>;
    // 按 position 升序
    async fn list_questions(&self, evaluation_id: i64) -> Result<Vec<Question>>;

    /// 学生作答
    // 复用该学生最近一次未提交的作答，没有则新建
    async fn start_or_resume_submission(&self, new: NewSubmission) -> Result<Submission>;
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    // 过滤条件同时生效；都为空时列出全部，按 id 升序
    async fn list_submissions(
        &self,
        evaluation_id: Option<i64>,
        student_id: Option<i64>,
    ) -> Result<Vec<Submission>>;
    // 替换答案并标记为已提交；只对 in_progress 的作答生效
    async fn save_submission_result(
        &self,
        submission_id: i64,
        answers: Vec<GradedAnswer>,
        score: i32,
    ) -> Result<SaveOutcome>;
    // 按 question_id 升序
    async fn list_answers(&self, submission_id: i64) -> Result<Vec<StudentAnswer>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
