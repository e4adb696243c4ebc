use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_required;

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    mut class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    for (field, value) in [
        ("name", &class_data.name),
        ("venue", &class_data.venue),
        ("scheduled_time", &class_data.scheduled_time),
    ] {
        if let Err(msg) = validate_required(field, value) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
        }
    }
    if class_data.total_students < 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "total_students must not be negative",
        )));
    }
    class_data.name = class_data.name.trim().to_string();

    // 课程必须存在
    match storage.get_course_by_id(class_data.course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            error!("Failed to load course {}: {}", class_data.course_id, e);
            return Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e));
        }
    }

    match storage.create_class(class_data).await {
        Ok(class) => {
            info!("Class {} created for course {}", class.name, class.course_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(class, "Class added")))
        }
        Err(e) => {
            error!("Class creation failed: {}", e);
            Ok(ApiResponse::from_error(ErrorCode::ClassCreationFailed, &e))
        }
    }
}
