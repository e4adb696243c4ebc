use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::lectures::requests::CreateLectureRequest;
use crate::models::users::entities::UserRole;
use crate::services::LectureService;

static LECTURE_SERVICE: Lazy<LectureService> = Lazy::new(LectureService::new_lazy);

pub async fn submit_lecture(
    req: HttpRequest,
    lecture_data: web::Json<CreateLectureRequest>,
) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE
        .submit_lecture(&req, lecture_data.into_inner())
        .await
}

pub fn configure_lectures_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/lectures")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::post()
                        .to(submit_lecture)
                        .wrap(middlewares::RequireRole::new_any(UserRole::lecturer_roles())),
                ),
            ),
    );
}
