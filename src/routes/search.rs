use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::search::requests::SearchQueryParams;
use crate::services::SearchService;

static SEARCH_SERVICE: Lazy<SearchService> = Lazy::new(SearchService::new_lazy);

pub async fn search(
    req: HttpRequest,
    module: web::Path<String>,
    query: web::Query<SearchQueryParams>,
) -> ActixResult<HttpResponse> {
    SEARCH_SERVICE
        .search(&req, module.into_inner(), query.into_inner().q)
        .await
}

pub fn configure_search_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/search")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("/{module}").route(web::get().to(search))),
    );
}
