pub mod activities;

pub mod auth;

pub mod competences;

pub mod evaluations;

pub mod graphes;

pub mod recommendations;

pub mod submissions;

pub mod users;

pub use activities::configure_activity_routes;
pub use auth::configure_auth_routes;
pub use competences::configure_competence_routes;
pub use evaluations::configure_evaluation_routes;
pub use graphes::configure_graphes_routes;
pub use recommendations::configure_recommendation_routes;
pub use submissions::configure_submission_routes;
pub use users::configure_user_routes;
