//! 报告服务
//!
//! 角色视图、审核、反馈、评分与导出

pub mod export;
pub mod feedback;
pub mod list;
pub mod ratings;
pub mod review;
pub mod sheet;
pub mod view;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::feedbacks::requests::CreateFeedbackRequest;
use crate::models::lectures::requests::UpdateLectureStatusRequest;
use crate::models::ratings::requests::CreateRatingRequest;
use crate::models::reports::requests::ReportQueryParams;
use crate::storage::Storage;

pub use view::{ReportView, view_for_role};

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
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

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 按角色视图列出报告
    pub async fn list_reports(
        &self,
        request: &HttpRequest,
        role: String,
        params: ReportQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_reports(self, request, role, params).await
    }

    // 审核报告（可附带反馈）
    pub async fn review_report(
        &self,
        request: &HttpRequest,
        lecture_id: i64,
        review: UpdateLectureStatusRequest,
    ) -> ActixResult<HttpResponse> {
        review::review_report(self, request, lecture_id, review).await
    }

    pub async fn add_feedback(
        &self,
        request: &HttpRequest,
        feedback: CreateFeedbackRequest,
    ) -> ActixResult<HttpResponse> {
        feedback::add_feedback(self, request, feedback).await
    }

    pub async fn list_feedback(
        &self,
        request: &HttpRequest,
        lecture_id: i64,
    ) -> ActixResult<HttpResponse> {
        feedback::list_feedback(self, request, lecture_id).await
    }

    pub async fn add_rating(
        &self,
        request: &HttpRequest,
        rating: CreateRatingRequest,
    ) -> ActixResult<HttpResponse> {
        ratings::add_rating(self, request, rating).await
    }

    // 课堂评分监控
    pub async fn list_ratings(
        &self,
        request: &HttpRequest,
        lecture_id: i64,
    ) -> ActixResult<HttpResponse> {
        ratings::list_ratings(self, request, lecture_id).await
    }

    // 导出单个报告
    pub async fn export_report(
        &self,
        request: &HttpRequest,
        lecture_id: i64,
    ) -> ActixResult<HttpResponse> {
        export::export_report(self, request, lecture_id).await
    }

    // 导出全部报告
    pub async fn export_all_reports(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        export::export_all_reports(self, request).await
    }
}
