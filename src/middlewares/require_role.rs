/*!
 * 基于角色的访问控制中间件
 *
 * 必须在 RequireJWT 之后使用。调用者角色不在允许列表中时返回 403。
 *
 * ```rust,ignore
 * web::resource("/api/courses").route(
 *     web::post()
 *         .to(create_course)
 *         .wrap(RequireRole::new(&UserRole::Pl)),
 * )
 * ```
 *
 * 或者允许多个角色：
 *
 * ```rust,ignore
 * .wrap(RequireRole::new_any(UserRole::reviewer_roles()))
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use super::gate_error_response;
use crate::errors::LuctError;
use crate::{middlewares::RequireJWT, models::users::entities::UserRole};

#[derive(Clone)]
pub struct RequireRole {
    allowed_roles: Rc<Vec<UserRole>>,
}

impl RequireRole {
    /// 仅允许单一角色
    pub fn new(role: &UserRole) -> Self {
        Self {
            allowed_roles: Rc::new(vec![*role]),
        }
    }

    /// 允许列表中的任一角色
    pub fn new_any(roles: &[&UserRole]) -> Self {
        Self {
            allowed_roles: Rc::new(roles.iter().map(|r| **r).collect()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            allowed_roles: self.allowed_roles.clone(),
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    allowed_roles: Rc<Vec<UserRole>>,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let allowed_roles = self.allowed_roles.clone();

        Box::pin(async move {
            match RequireJWT::extract_current_user(req.request()) {
                Some(user) if allowed_roles.contains(&user.role) => {
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Some(user) => {
                    info!(
                        "Access denied for user {} (role: {}). Allowed roles: {:?}",
                        user.id, user.role, allowed_roles
                    );
                    let err = LuctError::authorization("Access denied");
                    Ok(req.into_response(gate_error_response(&err).map_into_right_body()))
                }
                None => {
                    info!(
                        "Role check failed: no caller identity on request. Make sure RequireJWT middleware is applied first."
                    );
                    let err = LuctError::authentication("Authentication required");
                    Ok(req.into_response(gate_error_response(&err).map_into_right_body()))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::JwtUtils;
    use actix_web::http::{StatusCode, header::AUTHORIZATION};
    use actix_web::{App, HttpResponse, test, web};

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    fn bearer(role: UserRole) -> String {
        format!(
            "Bearer {}",
            JwtUtils::generate_access_token(3, &role).unwrap()
        )
    }

    #[actix_web::test]
    async fn test_allow_list() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api")
                    .wrap(RequireJWT)
                    .route(
                        "/status",
                        web::put()
                            .to(ok)
                            .wrap(RequireRole::new_any(UserRole::reviewer_roles())),
                    ),
            ),
        )
        .await;

        for (role, expected) in [
            (UserRole::Prl, StatusCode::OK),
            (UserRole::Pl, StatusCode::OK),
            (UserRole::Lecturer, StatusCode::FORBIDDEN),
            (UserRole::Student, StatusCode::FORBIDDEN),
        ] {
            let req = test::TestRequest::put()
                .uri("/api/status")
                .insert_header((AUTHORIZATION, bearer(role)))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected, "role {role}");

            if expected == StatusCode::FORBIDDEN {
                let body: serde_json::Value = test::read_body_json(resp).await;
                assert_eq!(body["msg"], "Access denied");
                assert_eq!(body["code"], crate::models::ErrorCode::Forbidden as i32);
            }
        }
    }

    #[actix_web::test]
    async fn test_without_jwt_layer_is_unauthorized() {
        let app = test::init_service(
            App::new().route(
                "/open",
                web::get().to(ok).wrap(RequireRole::new(&UserRole::Pl)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/open").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
