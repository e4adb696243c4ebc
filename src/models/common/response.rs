use serde::{Deserialize, Serialize};

use crate::errors::LuctError;
use crate::models::ErrorCode;

// 统一的API响应结构
//
// 错误时客户端读取 `msg` 字段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    #[serde(rename = "msg")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// 将存储层错误转换为带状态码的响应
    pub fn from_error(code: ErrorCode, err: &LuctError) -> actix_web::HttpResponse {
        let code = match err.status_code().as_u16() {
            400 if code == ErrorCode::InternalServerError => ErrorCode::BadRequest,
            404 if code == ErrorCode::InternalServerError => ErrorCode::NotFound,
            _ => code,
        };
        actix_web::HttpResponse::build(err.status_code())
            .json(Self::error_empty(code, err.message()))
    }
}
