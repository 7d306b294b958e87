//! Json / Query 反序列化失败时返回统一的错误外壳

use actix_web::{
    HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    http::StatusCode,
};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

fn json_error_status(err: &JsonPayloadError) -> StatusCode {
    match err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        JsonPayloadError::ContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::BAD_REQUEST,
    }
}

fn json_error_message(err: &JsonPayloadError) -> String {
    match err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "Request body is too large".to_string()
        }
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {e}"),
        other => format!("Invalid request body: {other}"),
    }
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let status = json_error_status(&err);
    let message = json_error_message(&err);
    debug!("JSON payload rejected on {}: {}", req.path(), message);

    let response =
        HttpResponse::build(status).json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid query parameters: {err}");
    debug!("Query rejected on {}: {}", req.path(), message);

    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_status() {
        assert_eq!(
            json_error_status(&JsonPayloadError::Overflow { limit: 10 }),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            json_error_status(&JsonPayloadError::ContentType),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );

        let de = serde_json::from_str::<u8>("x").unwrap_err();
        let err = JsonPayloadError::Deserialize(de);
        assert_eq!(json_error_status(&err), StatusCode::BAD_REQUEST);
        assert!(json_error_message(&err).starts_with("Invalid request body"));
    }
}
