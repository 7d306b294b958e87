pub mod enums;
pub mod response;

pub use response::ApiResponse;
