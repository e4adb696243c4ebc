//! 仪表盘统计
//!
//! 每个计数都是独立查询，并发执行；任一失败则整个请求失败。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::error;

use crate::errors::Result;
use crate::middlewares::{CurrentUser, RequireJWT};
use crate::models::dashboard::responses::DashboardStats;
use crate::models::lectures::entities::LectureStatus;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
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

    pub async fn get_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let Some(caller) = RequireJWT::extract_current_user(request) else {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized",
            )));
        };
        let storage = self.get_storage(request);

        match collect_stats(storage.as_ref(), caller).await {
            Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "Dashboard stats"))),
            Err(e) => {
                error!("Failed to build dashboard for {}: {}", caller.id, e);
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to load dashboard: {e}"),
                    )),
                )
            }
        }
    }
}

pub async fn collect_stats(storage: &dyn Storage, caller: CurrentUser) -> Result<DashboardStats> {
    match caller.role {
        UserRole::Student => {
            let (unrated_lectures, latest_report_at) = tokio::try_join!(
                storage.count_unrated_lectures(caller.id),
                storage.latest_lecture_created_at(),
            )?;
            Ok(DashboardStats::Student {
                unrated_lectures,
                latest_report_at,
            })
        }
        UserRole::Lecturer => {
            let (pending_reports, classes_reported) = tokio::try_join!(
                storage.count_lectures(Some(caller.id), Some(LectureStatus::Pending)),
                storage.count_classes_reported_by(caller.id),
            )?;
            Ok(DashboardStats::Lecturer {
                pending_reports,
                classes_reported,
            })
        }
        UserRole::Prl => {
            let (feedback_given, pending_reviews) = tokio::try_join!(
                storage.count_feedback_by_author(caller.id),
                storage.count_lectures(None, Some(LectureStatus::Pending)),
            )?;
            Ok(DashboardStats::Prl {
                feedback_given,
                pending_reviews,
            })
        }
        UserRole::Pl => {
            let (total_lectures, active_lecturers) = tokio::try_join!(
                storage.count_lectures(None, None),
                storage.count_active_users_by_role(UserRole::Lecturer),
            )?;
            Ok(DashboardStats::Pl {
                total_lectures,
                active_lecturers,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::test_support::{
        memory_storage, seed_class, seed_lecture, seed_user,
    };

    #[tokio::test]
    async fn test_stats_shape_per_role() {
        let storage = memory_storage().await;
        let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
        let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
        let student = seed_user(&storage, "student1", UserRole::Student).await;
        let prl = seed_user(&storage, "prl_user", UserRole::Prl).await;
        let pl = seed_user(&storage, "pl_user", UserRole::Pl).await;
        let lecture = seed_lecture(&storage, &class, &lecturer, "2025-03-10", "A", "B", 1).await;
        storage
            .create_feedback(lecture.id, prl.id, "Looks good")
            .await
            .unwrap();

        let as_caller = |user: &crate::models::users::entities::User| CurrentUser {
            id: user.id,
            role: user.role,
        };

        match collect_stats(&storage, as_caller(&student)).await.unwrap() {
            DashboardStats::Student {
                unrated_lectures,
                latest_report_at,
            } => {
                assert_eq!(unrated_lectures, 1);
                assert!(latest_report_at.is_some());
            }
            other => panic!("unexpected stats {other:?}"),
        }

        assert_eq!(
            collect_stats(&storage, as_caller(&lecturer)).await.unwrap(),
            DashboardStats::Lecturer {
                pending_reports: 1,
                classes_reported: 1
            }
        );
        assert_eq!(
            collect_stats(&storage, as_caller(&prl)).await.unwrap(),
            DashboardStats::Prl {
                feedback_given: 1,
                pending_reviews: 1
            }
        );
        assert_eq!(
            collect_stats(&storage, as_caller(&pl)).await.unwrap(),
            DashboardStats::Pl {
                total_lectures: 1,
                active_lecturers: 1
            }
        );
    }

    #[test]
    fn test_stats_serialize_with_role_tag() {
        let json = serde_json::to_value(DashboardStats::Prl {
            feedback_given: 2,
            pending_reviews: 5,
        })
        .unwrap();
        assert_eq!(json["role"], "PRL");
        assert_eq!(json["pending_reviews"], 5);
    }
}
