//! 班级作业与学生提交

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{error, info};

use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode, ListResponse};
use crate::storage::Storage;
use crate::utils::validate::{validate_lecture_date, validate_required};

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create_assignment(
        &self,
        request: &HttpRequest,
        mut data: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        let Some(created_by) = RequireJWT::extract_user_id(request) else {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized",
            )));
        };

        if let Err(msg) = validate_assignment(&mut data) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::AssignmentInvalid, msg)));
        }

        let storage = self.get_storage(request);
        match storage.get_class_by_id(data.class_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ClassNotFound,
                    "Class not found",
                )));
            }
            Err(e) => {
                error!("Failed to load class {}: {}", data.class_id, e);
                return Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e));
            }
        }

        match storage.create_assignment(created_by, data).await {
            Ok(assignment) => {
                info!(
                    "Assignment {} created for class {}",
                    assignment.id, assignment.class_id
                );
                Ok(HttpResponse::Created().json(ApiResponse::success(assignment, "Assignment created")))
            }
            Err(e) => {
                error!("Assignment creation failed: {}", e);
                Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
            }
        }
    }

    pub async fn list_assignments(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        match storage.list_assignments(class_id).await {
            Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                ListResponse::from(items),
                "Assignments",
            ))),
            Err(e) => {
                error!("Failed to list assignments for class {}: {}", class_id, e);
                Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
            }
        }
    }

    pub async fn submit_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        data: CreateSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        let Some(student_id) = RequireJWT::extract_user_id(request) else {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized",
            )));
        };

        if let Err(msg) = validate_required("content", &data.content) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::SubmissionInvalid, msg)));
        }

        let storage = self.get_storage(request);
        match storage.get_assignment_by_id(assignment_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::AssignmentNotFound,
                    "Assignment not found",
                )));
            }
            Err(e) => {
                error!("Failed to load assignment {}: {}", assignment_id, e);
                return Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e));
            }
        }

        match storage
            .create_submission(assignment_id, student_id, &data.content)
            .await
        {
            Ok(submission) => {
                info!(
                    "Student {} submitted assignment {}",
                    student_id, assignment_id
                );
                Ok(HttpResponse::Created().json(ApiResponse::success(submission, "Assignment submitted")))
            }
            Err(e) => {
                error!("Submission failed: {}", e);
                Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
            }
        }
    }
}

// 标题必填；截止日期可选，但给出时必须是 YYYY-MM-DD
fn validate_assignment(data: &mut CreateAssignmentRequest) -> Result<(), String> {
    validate_required("title", &data.title)?;
    data.title = data.title.trim().to_string();

    data.due_date = data
        .due_date
        .take()
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());
    if let Some(due_date) = &data.due_date {
        validate_lecture_date(due_date)?;
    }

    data.description = data
        .description
        .take()
        .filter(|d| !d.trim().is_empty());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, due_date: Option<&str>) -> CreateAssignmentRequest {
        CreateAssignmentRequest {
            class_id: 1,
            title: title.to_string(),
            description: Some("  ".to_string()),
            due_date: due_date.map(str::to_string),
        }
    }

    #[test]
    fn test_validate_assignment() {
        let mut ok = request("  Lab 1 ", Some("2025-04-01"));
        assert!(validate_assignment(&mut ok).is_ok());
        assert_eq!(ok.title, "Lab 1");
        assert_eq!(ok.description, None);

        let mut blank_due = request("Lab 2", Some(" "));
        assert!(validate_assignment(&mut blank_due).is_ok());
        assert_eq!(blank_due.due_date, None);

        assert!(validate_assignment(&mut request("", None)).is_err());
        assert!(validate_assignment(&mut request("Lab 3", Some("01/04/2025"))).is_err());
    }
}
