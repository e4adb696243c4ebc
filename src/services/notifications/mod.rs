use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::error;

use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, ListResponse};
use crate::storage::Storage;

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
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

    // 当前用户的通知，最新在前
    pub async fn list_notifications(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let Some(user_id) = RequireJWT::extract_user_id(request) else {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized",
            )));
        };

        let storage = self.get_storage(request);
        match storage.list_notifications(user_id).await {
            Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                ListResponse::from(items),
                "Notifications",
            ))),
            Err(e) => {
                error!("Failed to list notifications for {}: {}", user_id, e);
                Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
            }
        }
    }

    pub async fn mark_read(
        &self,
        request: &HttpRequest,
        notification_id: i64,
    ) -> ActixResult<HttpResponse> {
        let Some(user_id) = RequireJWT::extract_user_id(request) else {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized",
            )));
        };

        let storage = self.get_storage(request);
        match storage.mark_notification_read(notification_id, user_id).await {
            Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Notification marked as read"))),
            // 不存在或不属于当前用户
            Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotificationNotFound,
                "Notification not found",
            ))),
            Err(e) => {
                error!("Failed to mark notification {}: {}", notification_id, e);
                Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
            }
        }
    }
}
