use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode, ListResponse};

pub async fn list_faculties(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_faculties().await {
        Ok(faculties) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ListResponse::from(faculties),
            "Faculties retrieved",
        ))),
        Err(e) => {
            error!("Failed to list faculties: {}", e);
            Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
        }
    }
}

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_courses().await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ListResponse::from(courses),
            "Courses retrieved",
        ))),
        Err(e) => {
            error!("Failed to list courses: {}", e);
            Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
        }
    }
}
