use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ReportService, view_for_role};
use crate::errors::LuctError;
use crate::middlewares::RequireJWT;
use crate::models::reports::requests::ReportQueryParams;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, ListResponse};

pub async fn list_reports(
    service: &ReportService,
    request: &HttpRequest,
    role: String,
    params: ReportQueryParams,
) -> ActixResult<HttpResponse> {
    let Some(caller) = RequireJWT::extract_current_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized",
        )));
    };

    let Ok(requested_role) = role.parse::<UserRole>() else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ReportRoleInvalid,
            format!("Unknown report view: '{role}'"),
        )));
    };

    // 只能查看自己角色的视图，PL 可以查看任意视图
    if caller.role != requested_role && caller.role != UserRole::Pl {
        info!(
            "User {} ({}) denied {} report view",
            caller.id, caller.role, requested_role
        );
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Access denied",
        )));
    }

    let default_faculty = service.get_config().reports.prl_default_faculty_id;
    let scope = match view_for_role(requested_role).scope(&params, default_faculty) {
        Ok(scope) => scope,
        Err(LuctError::Validation(msg)) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ReportFacultyRequired, msg)));
        }
        Err(e) => return Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e)),
    };

    let storage = service.get_storage(request);
    match storage.list_reports(scope).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ListResponse::from(rows),
            "Reports retrieved",
        ))),
        Err(e) => {
            error!("Failed to list {} reports: {}", requested_role, e);
            Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
        }
    }
}
