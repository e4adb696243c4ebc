/*!
 * JWT 认证中间件
 *
 * 校验 `Authorization: Bearer <token>` 的签名与过期时间，
 * 成功后把 [`CurrentUser`] 写入请求扩展，供后续中间件和处理程序读取。
 * 本中间件只负责认证，角色校验由 [`RequireRole`](super::RequireRole) 完成。
 *
 * ```rust,ignore
 * web::scope("/api")
 *     .wrap(RequireJWT)
 *     .route("/profile", web::get().to(get_profile))
 * ```
 *
 * 令牌缺失、格式错误、签名无效或已过期时返回 401，响应不含 data。
 */

use crate::models::ErrorCode;
use crate::models::users::entities::UserRole;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::AUTHORIZATION,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, info};

use super::{create_error_response, gate_error_response};
use crate::errors::LuctError;

const BEARER_PREFIX: &str = "Bearer ";

/// 当前请求的调用者
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub role: UserRole,
}

#[derive(Clone)]
pub struct RequireJWT;

// 提取并验证 access token，解析出调用者身份
fn extract_current_user(req: &ServiceRequest) -> Result<CurrentUser, LuctError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| LuctError::authentication("No token"))?;

    let claims = JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        LuctError::authentication("Invalid token")
    })?;

    match (claims.user_id(), claims.user_role()) {
        (Some(id), Some(role)) => Ok(CurrentUser { id, role }),
        _ => Err(LuctError::authentication("Invalid token")),
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
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
        Box::pin(async move {
            // 预检请求直接放行
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Success, "")
                        .map_into_right_body(),
                ));
            }

            match extract_current_user(&req) {
                Ok(user) => {
                    debug!(
                        "JWT authentication successful for ID: {} ({})",
                        user.id, user.role
                    );
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err.message()
                    );
                    Ok(req.into_response(gate_error_response(&err).map_into_right_body()))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取调用者信息
impl RequireJWT {
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_current_user(req: &actix_web::HttpRequest) -> Option<CurrentUser> {
        req.extensions().get::<CurrentUser>().copied()
    }

    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<i64> {
        Self::extract_current_user(req).map(|user| user.id)
    }

    pub fn extract_user_role(req: &actix_web::HttpRequest) -> Option<UserRole> {
        Self::extract_current_user(req).map(|user| user.role)
    }
}
