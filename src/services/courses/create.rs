use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::middlewares::RequireJWT;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_required;

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    mut course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    for (field, value) in [("name", &course_data.name), ("code", &course_data.code)] {
        if let Err(msg) = validate_required(field, value) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
        }
    }
    course_data.name = course_data.name.trim().to_string();
    course_data.code = course_data.code.trim().to_string();

    // 学院必须存在
    match storage.get_faculty_by_id(course_data.faculty_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FacultyNotFound,
                "Faculty not found",
            )));
        }
        Err(e) => {
            error!("Failed to load faculty {}: {}", course_data.faculty_id, e);
            return Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e));
        }
    }

    // 课程代码唯一
    match storage.get_course_by_code(&course_data.code).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::CourseCodeAlreadyExists,
                "Course code already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check course code: {}", e);
            return Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e));
        }
    }

    match storage.create_course(course_data).await {
        Ok(course) => {
            info!(
                "Course {} created by {:?}",
                course.code,
                RequireJWT::extract_user_id(request)
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(course, "Course added")))
        }
        Err(e) if e.is_unique_violation() => {
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::CourseCodeAlreadyExists,
                "Course code already exists",
            )))
        }
        Err(e) => {
            error!("Course creation failed: {}", e);
            Ok(ApiResponse::from_error(ErrorCode::CourseCreationFailed, &e))
        }
    }
}
