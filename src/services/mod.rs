pub mod activities;
pub mod analytics;
pub mod auth;
pub mod competences;
pub mod evaluations;
pub mod recommendations;
pub mod submissions;
pub mod users;

pub use activities::ActivityService;
pub use analytics::AnalyticsService;
pub use auth::AuthService;
pub use competences::CompetenceService;
pub use evaluations::EvaluationService;
pub use recommendations::RecommendationService;
pub use submissions::SubmissionService;
pub use users::UserService;
