use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::courses::requests::AssignLecturerRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn assign_lecturer(
    service: &CourseService,
    request: &HttpRequest,
    assign_data: AssignLecturerRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 被指派者必须是讲师
    match storage.get_user_by_id(assign_data.lecturer_id).await {
        Ok(Some(user)) if user.role == UserRole::Lecturer => {}
        Ok(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::LecturerInvalid,
                "Target user is not a lecturer",
            )));
        }
        Err(e) => {
            error!("Failed to load user {}: {}", assign_data.lecturer_id, e);
            return Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e));
        }
    }

    match storage
        .assign_lecturer(assign_data.course_id, assign_data.lecturer_id)
        .await
    {
        Ok(Some(course)) => {
            info!(
                "Lecturer {} assigned to course {}",
                assign_data.lecturer_id, course.code
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(course, "Lecturer assigned")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => {
            error!("Failed to assign lecturer: {}", e);
            Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
        }
    }
}
