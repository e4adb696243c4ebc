use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ReportService;
use crate::middlewares::RequireJWT;
use crate::models::ratings::{requests::CreateRatingRequest, responses::RatingSummary};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_rating;

fn lecture_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::LectureNotFound,
        "Lecture not found",
    ))
}

pub async fn add_rating(
    service: &ReportService,
    request: &HttpRequest,
    mut rating: CreateRatingRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized",
        )));
    };

    if let Err(msg) = validate_rating(rating.rating) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::RatingInvalid, msg)));
    }

    let storage = service.get_storage(request);
    match storage.get_lecture_by_id(rating.lecture_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(lecture_not_found()),
        Err(e) => {
            error!("Failed to load lecture {}: {}", rating.lecture_id, e);
            return Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e));
        }
    }

    rating.comments = rating
        .comments
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    match storage.create_rating(user_id, rating).await {
        Ok(created) => {
            info!(
                "Lecture {} rated {} by {}",
                created.lecture_id, created.rating, user_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(created, "Rating added")))
        }
        Err(e) => {
            error!("Failed to add rating: {}", e);
            Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
        }
    }
}

pub async fn list_ratings(
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

    match storage.list_ratings_for_lecture(lecture_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RatingSummary::from(items),
            "Ratings retrieved",
        ))),
        Err(e) => {
            error!("Failed to list ratings for {}: {}", lecture_id, e);
            Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
        }
    }
}
