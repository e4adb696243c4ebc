use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode, ListResponse};

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_classes().await {
        Ok(classes) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ListResponse::from(classes),
            "Classes retrieved",
        ))),
        Err(e) => {
            error!("Failed to list classes: {}", e);
            Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
        }
    }
}
