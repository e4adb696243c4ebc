use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{error, info};

use crate::middlewares::RequireJWT;
use crate::models::announcements::requests::CreateAnnouncementRequest;
use crate::models::{ApiResponse, ErrorCode, ListResponse};
use crate::storage::Storage;
use crate::utils::validate::validate_required;

pub struct AnnouncementService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnnouncementService {
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

    pub async fn create_announcement(
        &self,
        request: &HttpRequest,
        mut data: CreateAnnouncementRequest,
    ) -> ActixResult<HttpResponse> {
        let Some(posted_by) = RequireJWT::extract_user_id(request) else {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized",
            )));
        };

        for (field, value) in [("title", &data.title), ("content", &data.content)] {
            if let Err(msg) = validate_required(field, value) {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::AnnouncementInvalid, msg)));
            }
        }
        data.title = data.title.trim().to_string();

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

        match storage.create_announcement(posted_by, data).await {
            Ok(announcement) => {
                info!(
                    "Announcement {} posted to class {}",
                    announcement.id, announcement.class_id
                );
                Ok(HttpResponse::Created()
                    .json(ApiResponse::success(announcement, "Announcement posted")))
            }
            Err(e) => {
                error!("Announcement creation failed: {}", e);
                Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
            }
        }
    }

    // 班级公告，最新在前
    pub async fn list_announcements(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        match storage.list_announcements(class_id).await {
            Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                ListResponse::from(items),
                "Announcements",
            ))),
            Err(e) => {
                error!("Failed to list announcements for class {}: {}", class_id, e);
                Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
            }
        }
    }
}
