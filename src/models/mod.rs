//! 业务数据模型
//!
//! 每个领域按 `entities` / `requests` / `responses` 拆分，
//! 与 `entity` 模块中的数据库实体相互独立。

pub mod activities;
pub mod analytics;
pub mod auth;
pub mod common;
pub mod competences;
pub mod evaluations;
pub mod recommendations;
pub mod submissions;
pub mod users;

pub use common::ApiResponse;

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 响应体中的业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,

    // 认证与用户
    AuthFailed = 2000,
    RegisterFailed = 2001,
    UserEmailInvalid = 2002,
    UserPasswordInvalid = 2003,
    UserEmailAlreadyExists = 2004,
    UserNotFound = 2005,
    UserFullNameInvalid = 2006,

    // 能力体系
    CompetenceNotFound = 3000,
    CompetenceInvalid = 3001,
    SubCompetenceNotFound = 3002,
    LevelNotFound = 3003,
    CompetenceResourceNotFound = 3004,
    PrerequisiteNotFound = 3005,
    PrerequisiteInvalid = 3006,

    // 学习活动
    ActivityNotFound = 4000,
    ActivityInvalid = 4001,
    ActivityResourceNotFound = 4002,

    // 测评
    EvaluationNotFound = 5000,
    EvaluationInvalid = 5001,
    EvaluationNotPublished = 5002,
    EvaluationAlreadyPublished = 5003,
    EvaluationHasNoQuestions = 5004,
    QuestionInvalid = 5005,

    // 作答
    SubmissionNotFound = 6000,
    SubmissionAlreadySubmitted = 6001,
    SubmissionInvalid = 6002,
}
