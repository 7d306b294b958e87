use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder, Result as ActixResult};

use crate::config::AppConfig;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
    users::entities::User,
};
use crate::utils::jwt;
use crate::utils::password::verify_password;
use crate::utils::validate::normalize_email;

use super::AuthService;

const LOGIN_FAILED_MESSAGE: &str = "Email or password is incorrect";

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();
    let email = normalize_email(&login_request.email);

    // 1. 根据邮箱获取用户信息
    match storage.get_user_by_email(&email).await {
        Ok(Some(user)) => {
            // 2. 验证密码
            if !verify_password(&login_request.password, &user.password_hash) {
                return Ok(HttpResponse::Unauthorized()
                    .json(ApiResponse::error_empty(ErrorCode::AuthFailed, LOGIN_FAILED_MESSAGE)));
            }

            // 3. 更新最后登录时间
            if let Err(e) = storage.update_last_login(user.id).await {
                tracing::warn!("Failed to update last login for user {}: {}", user.id, e);
            }

            // 4. 签发令牌对
            let refresh_days = if login_request.remember_me {
                config.jwt.refresh_token_remember_me_expiry
            } else {
                config.jwt.refresh_token_expiry
            };
            tracing::info!("User {} logged in successfully", user.email);
            Ok(issue_login_response(
                HttpResponse::Ok(),
                config,
                user,
                refresh_days,
                "Login successful",
            ))
        }
        Ok(None) => Ok(HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty(ErrorCode::AuthFailed, LOGIN_FAILED_MESSAGE))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Login failed: {e}"),
            )),
        ),
    }
}

/// 签发 access/refresh 令牌，refresh token 写入 http-only cookie
pub(super) fn issue_login_response(
    mut builder: HttpResponseBuilder,
    config: &AppConfig,
    user: User,
    refresh_days: i64,
    message: &str,
) -> HttpResponse {
    let refresh_ttl = chrono::Duration::days(refresh_days);

    match user.generate_token_pair(Some(refresh_ttl)) {
        Ok(token_pair) => {
            let refresh_cookie =
                jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token, refresh_ttl);

            let response = LoginResponse {
                access_token: token_pair.access_token,
                expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                user,
                created_at: chrono::Utc::now(),
            };

            builder
                .cookie(refresh_cookie)
                .json(ApiResponse::success(response, message))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Unable to generate token",
            ))
        }
    }
}
