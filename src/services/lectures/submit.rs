use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::LectureService;
use crate::middlewares::RequireJWT;
use crate::models::lectures::requests::{CreateLectureRequest, NewLecture};
use crate::models::reports::metrics::attendance_percentage;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_lecture_date, validate_required};

pub async fn submit_lecture(
    service: &LectureService,
    request: &HttpRequest,
    lecture_data: CreateLectureRequest,
) -> ActixResult<HttpResponse> {
    let Some(lecturer_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized",
        )));
    };
    let storage = service.get_storage(request);

    if let Err(msg) = validate_lecture(&lecture_data) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::LectureInvalid, msg)));
    }

    // 出勤率以班级容量为分母
    let class = match storage.get_class_by_id(lecture_data.class_id).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            error!("Failed to load class {}: {}", lecture_data.class_id, e);
            return Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e));
        }
    };

    let new_lecture = NewLecture {
        class_id: class.id,
        lecturer_id,
        week_of_reporting: lecture_data.week_of_reporting.trim().to_string(),
        date_of_lecture: lecture_data.date_of_lecture.trim().to_string(),
        actual_students: lecture_data.actual_students,
        topic_taught: lecture_data.topic_taught,
        learning_outcomes: lecture_data.learning_outcomes,
        recommendations: lecture_data.recommendations,
        materials_used: non_blank(lecture_data.materials_used),
        materials_file_url: non_blank(lecture_data.materials_file_url),
        attendance_percentage: attendance_percentage(
            lecture_data.actual_students,
            class.total_students,
        ),
    };

    match storage.create_lecture(new_lecture).await {
        Ok(lecture) => {
            info!(
                "Lecture report {} submitted by {} for class {}",
                lecture.id, lecturer_id, class.name
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(lecture, "Report submitted")))
        }
        Err(e) => {
            error!("Lecture submission failed: {}", e);
            Ok(ApiResponse::from_error(ErrorCode::LectureCreationFailed, &e))
        }
    }
}

fn validate_lecture(req: &CreateLectureRequest) -> Result<(), String> {
    validate_required("week_of_reporting", &req.week_of_reporting)?;
    validate_lecture_date(req.date_of_lecture.trim())?;
    validate_required("topic_taught", &req.topic_taught)?;
    validate_required("learning_outcomes", &req.learning_outcomes)?;
    validate_required("recommendations", &req.recommendations)?;
    if req.actual_students < 0 {
        return Err("actual_students must not be negative".to_string());
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
