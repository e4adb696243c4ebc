use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ReportService;
use crate::errors::LuctError;
use crate::middlewares::RequireJWT;
use crate::models::feedbacks::requests::CreateFeedbackRequest;
use crate::models::{ApiResponse, ErrorCode, ListResponse};

fn lecture_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::LectureNotFound,
        "Lecture not found",
    ))
}

pub async fn add_feedback(
    service: &ReportService,
    request: &HttpRequest,
    feedback: CreateFeedbackRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized",
        )));
    };

    let text = feedback.feedback_text.trim();
    if text.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FeedbackInvalid,
            "feedback_text is required",
        )));
    }

    let storage = service.get_storage(request);
    match storage
        .create_feedback(feedback.lecture_id, user_id, text)
        .await
    {
        Ok(created) => {
            info!("Feedback added to lecture {} by {}", created.lecture_id, user_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(created, "Feedback added")))
        }
        Err(LuctError::NotFound(_)) => Ok(lecture_not_found()),
        Err(e) => {
            error!("Failed to add feedback: {}", e);
            Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
        }
    }
}

pub async fn list_feedback(
    service: &ReportService,
    request: &HttpRequest,
    lecture_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_lecture_by_id(lecture_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(lecture_not_found()),
        Err(e) => {
            error!("Failed to load lecture {}: {}", lecture_id, e);
            return Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e));
        }
    }

    match storage.list_feedback_for_lecture(lecture_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ListResponse::from(items),
            "Feedback retrieved",
        ))),
        Err(e) => {
            error!("Failed to list feedback for {}: {}", lecture_id, e);
            Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
        }
    }
}
