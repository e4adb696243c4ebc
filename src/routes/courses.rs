use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::requests::{AssignLecturerRequest, CreateCourseRequest};
use crate::models::users::entities::UserRole;
use crate::services::CourseService;

// 懒加载的全局 COURSE_SERVICE 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

pub async fn list_faculties(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_faculties(&req).await
}

pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(&req, course_data.into_inner())
        .await
}

pub async fn assign_lecturer(
    req: HttpRequest,
    assign_data: web::Json<AssignLecturerRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .assign_lecturer(&req, assign_data.into_inner())
        .await
}

// 配置路由
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/faculties")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("").route(web::get().to(list_faculties))),
    )
    .service(
        web::scope("/api/courses")
            .wrap(middlewares::RequireJWT)
            .service(
                // 所有登录用户可查看，仅 PL 可新增
                web::resource("").route(web::get().to(list_courses)).route(
                    web::post()
                        .to(create_course)
                        .wrap(middlewares::RequireRole::new_any(UserRole::pl_roles())),
                ),
            ),
    )
    .service(
        web::scope("/api/assign-lecturer")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::post()
                        .to(assign_lecturer)
                        .wrap(middlewares::RequireRole::new_any(UserRole::pl_roles())),
                ),
            ),
    );
}
