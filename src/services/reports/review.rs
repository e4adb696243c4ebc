use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ReportService;
use crate::middlewares::RequireJWT;
use crate::models::lectures::requests::UpdateLectureStatusRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn review_report(
    service: &ReportService,
    request: &HttpRequest,
    lecture_id: i64,
    review: UpdateLectureStatusRequest,
) -> ActixResult<HttpResponse> {
    let Some(reviewer_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized",
        )));
    };
    let storage = service.get_storage(request);

    match storage
        .review_lecture(lecture_id, review.status, reviewer_id, review.feedback)
        .await
    {
        Ok(Some(lecture)) => {
            info!(
                "Lecture report {} marked {} by {}",
                lecture.id, lecture.status, reviewer_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(lecture, "Status updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LectureNotFound,
            "Report not found",
        ))),
        Err(e) => {
            error!("Failed to review lecture {}: {}", lecture_id, e);
            Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
        }
    }
}
