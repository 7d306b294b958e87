//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod activities;
mod activity_resources;
mod competence_resources;
mod competences;
mod evaluations;
mod levels;
mod prerequisites;
mod sub_competences;
mod submissions;
mod users;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::errors::{Result, SkillFlowError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SkillFlowError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SkillFlowError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SkillFlowError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 内存 SQLite，仅测试使用
    #[cfg(test)]
    pub(crate) async fn new_in_memory() -> Result<Self> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| SkillFlowError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .foreign_keys(true);

        // 内存库随连接销毁，池中只保留一个常驻连接
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opt)
            .await
            .map_err(|e| SkillFlowError::database_connection(format!("SQLite 连接失败: {e}")))?;

        let db = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);
        Migrator::up(&db, None)
            .await
            .map_err(|e| SkillFlowError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SkillFlowError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn count_users_by_role(&self, role: UserRole) -> Result<u64> {
        self.count_users_by_role_impl(role).await
    }

    async fn create_competence(&self, req: CompetenceRequest) -> Result<Competence> {
        self.create_competence_impl(req).await
    }

    async fn get_competence_by_id(&self, id: i64) -> Result<Option<Competence>> {
        self.get_competence_by_id_impl(id).await
    }

    async fn list_competences(&self) -> Result<Vec<Competence>> {
        self.list_competences_impl().await
    }

    async fn update_competence(
        &self,
        id: i64,
        req: CompetenceRequest,
    ) -> Result<Option<Competence>> {
        self.update_competence_impl(id, req).await
    }

    async fn delete_competence(&self, id: i64) -> Result<bool> {
        self.delete_competence_impl(id).await
    }

    async fn create_sub_competence(&self, req: SubCompetenceRequest) -> Result<SubCompetence> {
        self.create_sub_competence_impl(req).await
    }

    async fn get_sub_competence_by_id(&self, id: i64) -> Result<Option<SubCompetence>> {
        self.get_sub_competence_by_id_impl(id).await
    }

    async fn list_sub_competences(&self, competence_id: Option<i64>) -> Result<Vec<SubCompetence>> {
        self.list_sub_competences_impl(competence_id).await
    }

    async fn update_sub_competence(
        &self,
        id: i64,
        req: SubCompetenceRequest,
    ) -> Result<Option<SubCompetence>> {
        self.update_sub_competence_impl(id, req).await
    }

    async fn delete_sub_competence(&self, id: i64) -> Result<bool> {
        self.delete_sub_competence_impl(id).await
    }

    async fn create_level(&self, req: LevelRequest) -> Result<Level> {
        self.create_level_impl(req).await
    }

    async fn get_level_by_id(&self, id: i64) -> Result<Option<Level>> {
        self.get_level_by_id_impl(id).await
    }

    async fn list_levels(&self, competence_id: Option<i64>) -> Result<Vec<Level>> {
        self.list_levels_impl(competence_id).await
    }

    async fn update_level(&self, id: i64, req: LevelRequest) -> Result<Option<Level>> {
        self.update_level_impl(id, req).await
    }

    async fn delete_level(&self, id: i64) -> Result<bool> {
        self.delete_level_impl(id).await
    }

    async fn create_competence_resource(
        &self,
        req: CompetenceResourceRequest,
    ) -> Result<CompetenceResource> {
        self.create_competence_resource_impl(req).await
    }

    async fn get_competence_resource_by_id(&self, id: i64) -> Result<Option<CompetenceResource>> {
        self.get_competence_resource_by_id_impl(id).await
    }

    async fn list_competence_resources(
        &self,
        competence_id: Option<i64>,
    ) -> Result<Vec<CompetenceResource>> {
        self.list_competence_resources_impl(competence_id).await
    }

    async fn update_competence_resource(
        &self,
        id: i64,
        req: CompetenceResourceRequest,
    ) -> Result<Option<CompetenceResource>> {
        self.update_competence_resource_impl(id, req).await
    }

    async fn delete_competence_resource(&self, id: i64) -> Result<bool> {
        self.delete_competence_resource_impl(id).await
    }

    async fn create_prerequisite(&self, req: PrerequisiteRequest) -> Result<Prerequisite> {
        self.create_prerequisite_impl(req).await
    }

    async fn get_prerequisite_by_id(&self, id: i64) -> Result<Option<Prerequisite>> {
        self.get_prerequisite_by_id_impl(id).await
    }

    async fn list_prerequisites(&self) -> Result<Vec<Prerequisite>> {
        self.list_prerequisites_impl().await
    }

    async fn update_prerequisite(
        &self,
        id: i64,
        req: PrerequisiteRequest,
    ) -> Result<Option<Prerequisite>> {
        self.update_prerequisite_impl(id, req).await
    }

    async fn delete_prerequisite(&self, id: i64) -> Result<bool> {
        self.delete_prerequisite_impl(id).await
    }

    async fn create_activity(&self, req: ActivityRequest) -> Result<Activity> {
        self.create_activity_impl(req).await
    }

    async fn get_activity_by_id(&self, id: i64) -> Result<Option<Activity>> {
        self.get_activity_by_id_impl(id).await
    }

    async fn list_activities(&self, competence_id: Option<i64>) -> Result<Vec<Activity>> {
        self.list_activities_impl(competence_id).await
    }

    async fn update_activity(&self, id: i64, req: ActivityRequest) -> Result<Option<Activity>> {
        self.update_activity_impl(id, req).await
    }

    async fn delete_activity(&self, id: i64) -> Result<bool> {
        self.delete_activity_impl(id).await
    }

    async fn create_activity_resource(
        &self,
        activity_id: i64,
        req: CreateActivityResourceRequest,
    ) -> Result<ActivityResource> {
        self.create_activity_resource_impl(activity_id, req).await
    }

    async fn get_activity_resource_by_id(&self, id: i64) -> Result<Option<ActivityResource>> {
        self.get_activity_resource_by_id_impl(id).await
    }

    async fn list_activity_resources(&self, activity_id: i64) -> Result<Vec<ActivityResource>> {
        self.list_activity_resources_impl(activity_id).await
    }

    async fn update_activity_resource(
        &self,
        id: i64,
        req: UpdateActivityResourceRequest,
    ) -> Result<Option<ActivityResource>> {
        self.update_activity_resource_impl(id, req).await
    }

    async fn delete_activity_resource(&self, id: i64) -> Result<bool> {
        self.delete_activity_resource_impl(id).await
    }

    async fn create_evaluation(&self, req: EvaluationRequest) -> Result<Evaluation> {
        self.create_evaluation_impl(req).await
    }

    async fn get_evaluation_by_id(&self, id: i64) -> Result<Option<Evaluation>> {
        self.get_evaluation_by_id_impl(id).await
    }

    async fn list_evaluations(&self, status: Option<EvaluationStatus>) -> Result<Vec<Evaluation>> {
        self.list_evaluations_impl(status).await
    }

    async fn update_evaluation(
        &self,
        id: i64,
        req: EvaluationRequest,
    ) -> Result<Option<Evaluation>> {
        self.update_evaluation_impl(id, req).await
    }

    async fn set_evaluation_status(
        &self,
        id: i64,
        status: EvaluationStatus,
    ) -> Result<Option<Evaluation>> {
        self.set_evaluation_status_impl(id, status).await
    }

    async fn delete_evaluation(&self, id: i64) -> Result<bool> {
        self.delete_evaluation_impl(id).await
    }

    async fn count_questions_grouped(&self) -> Result<HashMap<i64, u64>> {
        self.count_questions_grouped_impl().await
    }

    async fn count_questions(&self, evaluation_id: i64) -> Result<u64> {
        self.count_questions_impl(evaluation_id).await
    }

    async fn create_question(
        &self,
        evaluation_id: i64,
        label: String,
        options: Vec<String>,
        correct_answer: String,
    ) -> Result<Question> {
        self.create_question_impl(evaluation_id, label, options, correct_answer).await
    }

    async fn list_questions(&self, evaluation_id: i64) -> Result<Vec<Question>> {
        self.list_questions_impl(evaluation_id).await
    }

    async fn start_or_resume_submission(&self, new: NewSubmission) -> Result<Submission> {
        self.start_or_resume_submission_impl(new).await
    }

    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(id).await
    }

    async fn list_submissions(
        &self,
        evaluation_id: Option<i64>,
        student_id: Option<i64>,
    ) -> Result<Vec<Submission>> {
        self.list_submissions_impl(evaluation_id, student_id).await
    }

    async fn save_submission_result(
        &self,
        submission_id: i64,
        answers: Vec<GradedAnswer>,
        score: i32,
    ) -> Result<SaveOutcome> {
        self.save_submission_result_impl(submission_id, answers, score).await
    }

    async fn list_answers(&self, submission_id: i64) -> Result<Vec<StudentAnswer>> {
        self.list_answers_impl(submission_id).await
    }
}
