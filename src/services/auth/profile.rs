use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::middlewares::RequireJWT;
use crate::models::auth::requests::{ChangePasswordRequest, UpdateProfileRequest};
use crate::models::users::responses::UserResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::{hash_password, verify_password};
use crate::utils::validate::{validate_email, validate_password};

use super::AuthService;

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::Unauthorized,
        "Unauthorized",
    ))
}

fn user_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::UserNotFound,
        "User not found",
    ))
}

pub async fn handle_get_profile(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request);

    match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserResponse { user },
            "Profile retrieved",
        ))),
        Ok(None) => Ok(user_not_found()),
        Err(e) => {
            error!("Failed to load profile {}: {}", user_id, e);
            Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
        }
    }
}

pub async fn handle_update_profile(
    service: &AuthService,
    update_data: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request);

    if let Some(ref email) = update_data.email
        && let Err(msg) = validate_email(email.trim())
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    if update_data
        .full_name
        .as_deref()
        .is_some_and(|name| name.trim().is_empty())
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "full_name is required",
        )));
    }

    match storage.update_user_profile(user_id, update_data).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserResponse { user },
            "Profile updated",
        ))),
        Ok(None) => Ok(user_not_found()),
        Err(e) => {
            error!("Failed to update profile {}: {}", user_id, e);
            Ok(ApiResponse::from_error(ErrorCode::UserUpdateFailed, &e))
        }
    }
}

pub async fn handle_change_password(
    service: &AuthService,
    change_request: ChangePasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request);

    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return Ok(user_not_found()),
        Err(e) => {
            error!("Failed to load user {}: {}", user_id, e);
            return Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e));
        }
    };

    if !verify_password(&change_request.current_password, &user.password_hash) {
        info!("Password change rejected for {}", user.username);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Current password is incorrect",
        )));
    }

    if let Err(msg) = validate_password(&change_request.new_password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
    }

    let password_hash = match hash_password(&change_request.new_password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {}", e);
            return Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e));
        }
    };

    match storage.update_user_password(user_id, &password_hash).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Password changed"))),
        Ok(false) => Ok(user_not_found()),
        Err(e) => {
            error!("Failed to change password for {}: {}", user_id, e);
            Ok(ApiResponse::from_error(ErrorCode::UserUpdateFailed, &e))
        }
    }
}
