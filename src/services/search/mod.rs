use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::error;

use crate::errors::Result;
use crate::models::search::entities::{SearchModule, SearchResults};
use crate::models::users::responses::UserSummary;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct SearchService {
    storage: Option<Arc<dyn Storage>>,
}

impl SearchService {
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

    // 单表子串搜索
    pub async fn search(
        &self,
        request: &HttpRequest,
        module: String,
        query: Option<String>,
    ) -> ActixResult<HttpResponse> {
        let module = match module.parse::<SearchModule>() {
            Ok(module) => module,
            Err(msg) => {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::SearchModuleInvalid, msg)));
            }
        };

        let storage = self.get_storage(request);
        match run_search(storage.as_ref(), module, query.as_deref().unwrap_or_default()).await {
            Ok(results) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                results,
                "Search completed",
            ))),
            Err(e) => {
                error!("Search failed: {}", e);
                Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e))
            }
        }
    }
}

pub async fn run_search(
    storage: &dyn Storage,
    module: SearchModule,
    term: &str,
) -> Result<SearchResults> {
    let term = term.trim();
    if term.is_empty() {
        return Ok(SearchResults::empty(module));
    }

    Ok(match module {
        SearchModule::Lectures => SearchResults::Lectures(storage.search_lectures(term).await?),
        SearchModule::Courses => SearchResults::Courses(storage.search_courses(term).await?),
        SearchModule::Users => SearchResults::Users(
            storage
                .search_users(term)
                .await?
                .into_iter()
                .map(UserSummary::from)
                .collect(),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;
    use crate::storage::sea_orm_storage::test_support::{
        memory_storage, seed_class, seed_lecture, seed_user,
    };

    #[tokio::test]
    async fn test_blank_query_returns_empty() {
        let storage = memory_storage().await;
        let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
        let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
        seed_lecture(&storage, &class, &lecturer, "2025-03-10", "Algebra", "None", 1).await;

        let results = run_search(&storage, SearchModule::Lectures, "   ")
            .await
            .unwrap();
        assert!(results.is_empty());

        let results = run_search(&storage, SearchModule::Lectures, "ALGEBRA")
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn test_user_results_hide_account_fields() {
        let storage = memory_storage().await;
        seed_user(&storage, "student1", UserRole::Student).await;

        let results = run_search(&storage, SearchModule::Users, "student1")
            .await
            .unwrap();
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json[0]["username"], "student1");
        assert!(json[0].get("status").is_none());
        assert!(json[0].get("password_hash").is_none());
    }
}
