use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::feedbacks::requests::CreateFeedbackRequest;
use crate::models::lectures::requests::UpdateLectureStatusRequest;
use crate::models::ratings::requests::CreateRatingRequest;
use crate::models::reports::requests::ReportQueryParams;
use crate::models::users::entities::UserRole;
use crate::services::ReportService;
use crate::utils::{SafeIDI64, SafeLectureIdI64};

// 懒加载的全局 REPORT_SERVICE 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

pub async fn list_reports(
    req: HttpRequest,
    role: web::Path<String>,
    query: web::Query<ReportQueryParams>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .list_reports(&req, role.into_inner(), query.into_inner())
        .await
}

pub async fn update_status(
    req: HttpRequest,
    lecture_id: SafeIDI64,
    review: web::Json<UpdateLectureStatusRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .review_report(&req, lecture_id.0, review.into_inner())
        .await
}

pub async fn list_feedback(
    req: HttpRequest,
    lecture_id: SafeLectureIdI64,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.list_feedback(&req, lecture_id.0).await
}

pub async fn add_feedback(
    req: HttpRequest,
    feedback: web::Json<CreateFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .add_feedback(&req, feedback.into_inner())
        .await
}

pub async fn add_rating(
    req: HttpRequest,
    rating: web::Json<CreateRatingRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.add_rating(&req, rating.into_inner()).await
}

pub async fn list_ratings(
    req: HttpRequest,
    lecture_id: SafeLectureIdI64,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.list_ratings(&req, lecture_id.0).await
}

pub async fn export_report(req: HttpRequest, lecture_id: SafeIDI64) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.export_report(&req, lecture_id.0).await
}

pub async fn export_all_reports(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.export_all_reports(&req).await
}

// 配置路由
pub fn configure_reports_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/reports")
            .wrap(middlewares::RequireJWT)
            // 角色视图，服务层再校验调用者角色
            .service(web::resource("/{role}").route(web::get().to(list_reports)))
            .service(
                web::resource("/{id}/status").route(
                    web::put()
                        .to(update_status)
                        .wrap(middlewares::RequireRole::new_any(UserRole::reviewer_roles())),
                ),
            )
            .service(
                web::resource("/{lecture_id}/feedback").route(web::get().to(list_feedback)),
            ),
    )
    .service(
        web::scope("/api/feedback")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("").route(web::post().to(add_feedback))),
    )
    .service(
        web::scope("/api/rating")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("").route(web::post().to(add_rating))),
    )
    .service(
        web::scope("/api/monitoring")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("/{lecture_id}").route(web::get().to(list_ratings))),
    )
    .service(
        web::scope("/api/export")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("/reports/{id}").route(web::get().to(export_report)))
            .service(
                web::resource("/all-reports").route(
                    web::get()
                        .to(export_all_reports)
                        .wrap(middlewares::RequireRole::new_any(UserRole::reviewer_roles())),
                ),
            ),
    );
}
