//! 路径 ID 提取器
//!
//! 在进入 service 之前把路径段解析为正整数，失败时直接返回 400。

use actix_web::{HttpResponse, error::InternalError};

use crate::models::{ApiResponse, ErrorCode};

/// 解析正整数 ID
pub fn parse_positive_i64(raw: &str) -> Result<i64, &'static str> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        Ok(_) => Err("must be a positive integer"),
        Err(_) => Err("must be an integer"),
    }
}

pub fn invalid_path_param(param: &str, reason: &str) -> actix_web::Error {
    let message = format!("Invalid path parameter '{param}': {reason}");
    InternalError::from_response(
        message.clone(),
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message)),
    )
    .into()
}

/// 生成按名称读取路径参数的 i64 提取器
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = std::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let result = match req.match_info().get($param) {
                    Some(raw) => $crate::utils::extractor::parse_positive_i64(raw)
                        .map($name)
                        .map_err(|reason| {
                            $crate::utils::extractor::invalid_path_param($param, reason)
                        }),
                    None => Err($crate::utils::extractor::invalid_path_param(
                        $param, "missing",
                    )),
                };
                std::future::ready(result)
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");
define_safe_i64_extractor!(SafeCompetenceIdI64, "competence_id");
define_safe_i64_extractor!(SafeStudentIdI64, "student_id");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::FromRequest;
    use actix_web::test::TestRequest;

    #[test]
    fn test_parse_positive_i64() {
        assert_eq!(parse_positive_i64("42"), Ok(42));
        assert!(parse_positive_i64("0").is_err());
        assert!(parse_positive_i64("-3").is_err());
        assert!(parse_positive_i64("abc").is_err());
        assert!(parse_positive_i64("99999999999999999999").is_err());
    }

    #[actix_web::test]
    async fn test_extracts_named_segment() {
        let req = TestRequest::default()
            .param("competence_id", "7")
            .to_http_request();
        let extracted = SafeCompetenceIdI64::extract(&req).await.unwrap();
        assert_eq!(extracted, SafeCompetenceIdI64(7));

        assert!(SafeIDI64::extract(&req).await.is_err());
    }

    #[actix_web::test]
    async fn test_rejects_invalid_segment() {
        let req = TestRequest::default().param("id", "-1").to_http_request();
        let err = SafeIDI64::extract(&req).await.unwrap_err();
        assert_eq!(
            err.as_response_error().status_code(),
            actix_web::http::StatusCode::BAD_REQUEST
        );
    }
}
