use super::entities::UserRole;

/// 存储层创建用户的参数，password 为哈希后的值
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: UserRole,
}
