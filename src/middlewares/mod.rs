pub mod rate_limit;
pub mod require_jwt;
pub mod require_role;

use actix_web::{HttpResponse, http::StatusCode, http::header::CONTENT_TYPE};

use crate::errors::LuctError;
use crate::models::{ApiResponse, ErrorCode};

pub use rate_limit::RateLimit;
pub use require_jwt::{CurrentUser, RequireJWT};
pub use require_role::RequireRole;

// 中间件统一的错误响应，始终携带 msg 字段
pub(crate) fn create_error_response(
    status: StatusCode,
    code: ErrorCode,
    message: &str,
) -> HttpResponse {
    match status {
        StatusCode::NO_CONTENT => HttpResponse::build(status).finish(),
        _ => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .json(ApiResponse::<()>::error_empty(code, message)),
    }
}

// 认证 / 授权失败的响应，状态码取自 LuctError::status_code
pub(crate) fn gate_error_response(err: &LuctError) -> HttpResponse {
    let code = match err {
        LuctError::Authorization(_) => ErrorCode::Forbidden,
        _ => ErrorCode::Unauthorized,
    };
    create_error_response(err.status_code(), code, err.message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_errors_map_to_401_and_403() {
        let resp = gate_error_response(&LuctError::authentication("Invalid token"));
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = gate_error_response(&LuctError::authorization("Access denied"));
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
