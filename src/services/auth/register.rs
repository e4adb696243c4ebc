use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::RegisterRequest, responses::RegisterResponse},
    users::{entities::UserRole, requests::NewUser},
};
use crate::utils::password::hash_password;
use crate::utils::validate::{
    validate_email, validate_password, validate_required, validate_username,
};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = validate_register_request(&register_request) {
        return Ok(response);
    }

    // 检查用户名是否已存在
    match storage.get_user_by_username(&register_request.username).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::UserNameAlreadyExists,
                "Username already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Register lookup failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("Register failed: {e}"),
                )),
            );
        }
    }

    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("Register failed: {e}"),
                )),
            );
        }
    };

    let student_id = register_request
        .student_id
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let new_user = NewUser {
        username: register_request.username,
        password_hash,
        role: register_request.role,
        full_name: register_request.full_name.trim().to_string(),
        email: register_request.email.trim().to_string(),
        student_id,
    };

    match storage.create_user(new_user).await {
        Ok(user) => {
            info!("User {} registered as {}", user.username, user.role);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                RegisterResponse { user_id: user.id },
                "User registered",
            )))
        }
        // 并发注册同名用户时由唯一约束兜底
        Err(e) if e.is_unique_violation() => {
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::UserNameAlreadyExists,
                "Username already exists",
            )))
        }
        Err(e) => {
            error!("Register failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("Register failed: {e}"),
                )),
            )
        }
    }
}

fn validate_register_request(req: &RegisterRequest) -> Result<(), HttpResponse> {
    if let Err(msg) = validate_username(&req.username) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }
    if let Err(msg) = validate_email(req.email.trim()) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }
    if let Err(msg) = validate_password(&req.password) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
    }
    if let Err(msg) = validate_required("full_name", &req.full_name) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }
    // 学生必须填写学号
    if req.role == UserRole::Student
        && req
            .student_id
            .as_deref()
            .is_none_or(|s| s.trim().is_empty())
    {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "student_id is required",
        )));
    }
    Ok(())
}
