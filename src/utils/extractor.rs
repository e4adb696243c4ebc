//! 安全的路径参数提取器
//!
//! 路径中的 ID 必须是正整数，否则直接返回 400，不会进入业务逻辑。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn parse_positive_id(req: &HttpRequest, param: &str) -> Option<i64> {
    req.match_info()
        .get(param)
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|id| *id > 0)
}

fn invalid_param_error(param: &str) -> actix_web::Error {
    let message = format!("Invalid path parameter: {param}");
    let response = HttpResponse::BadRequest()
        .json(ApiResponse::error_empty(ErrorCode::BadRequest, &message));
    InternalError::from_response(message, response).into()
}

macro_rules! define_safe_id_extractors {
    ($($name:ident => $param:literal),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy)]
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                    ready(
                        parse_positive_id(req, $param)
                            .map($name)
                            .ok_or_else(|| invalid_param_error($param)),
                    )
                }
            }
        )*
    };
}

define_safe_id_extractors! {
    SafeIDI64 => "id",
    SafeLectureIdI64 => "lecture_id",
    SafeClassIdI64 => "class_id",
    SafeAssignmentIdI64 => "assignment_id",
    SafeNotificationIdI64 => "notification_id",
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test, web};

    async fn echo(id: SafeLectureIdI64) -> HttpResponse {
        HttpResponse::Ok().body(id.0.to_string())
    }

    #[actix_web::test]
    async fn test_valid_and_invalid_ids() {
        let app = test::init_service(
            App::new().route("/lectures/{lecture_id}", web::get().to(echo)),
        )
        .await;

        let req = test::TestRequest::get().uri("/lectures/17").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(test::read_body(resp).await, "17");

        for bad in ["abc", "0", "-3"] {
            let req = test::TestRequest::get()
                .uri(&format!("/lectures/{bad}"))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        }
    }
}
