use super::SeaOrmStorage;
use crate::entity::ratings::{ActiveModel, Column, Entity as Ratings};
use crate::errors::{LuctError, Result};
use crate::models::ratings::{entities::Rating, requests::CreateRatingRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 追加评分
    pub async fn create_rating_impl(
        &self,
        rated_by: i64,
        req: CreateRatingRequest,
    ) -> Result<Rating> {
        let model = ActiveModel {
            lecture_id: Set(req.lecture_id),
            rated_by: Set(rated_by),
            rating: Set(req.rating),
            comments: Set(req.comments),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("创建评分失败: {e}")))?;

        Ok(result.into_rating())
    }

    pub async fn list_ratings_for_lecture_impl(&self, lecture_id: i64) -> Result<Vec<Rating>> {
        let result = Ratings::find()
            .filter(Column::LectureId.eq(lecture_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询评分失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_rating()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{memory_storage, seed_class, seed_lecture, seed_user};
    use crate::models::ratings::requests::CreateRatingRequest;
    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;

    #[tokio::test]
    async fn test_ratings_are_append_only_per_lecture() {
        let storage = memory_storage().await;
        let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
        let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
        let student = seed_user(&storage, "student1", UserRole::Student).await;
        let first = seed_lecture(&storage, &class, &lecturer, "2025-03-10", "A", "B", 1).await;
        let second = seed_lecture(&storage, &class, &lecturer, "2025-03-11", "C", "D", 1).await;

        for score in [3, 5] {
            storage
                .create_rating(
                    student.id,
                    CreateRatingRequest {
                        lecture_id: first.id,
                        rating: score,
                        comments: Some("ok".into()),
                    },
                )
                .await
                .unwrap();
        }

        let ratings = storage.list_ratings_for_lecture(first.id).await.unwrap();
        assert_eq!(ratings.iter().map(|r| r.rating).collect::<Vec<_>>(), [3, 5]);
        assert!(storage
            .list_ratings_for_lecture(second.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_rating_for_missing_lecture_fails() {
        let storage = memory_storage().await;
        let student = seed_user(&storage, "student1", UserRole::Student).await;

        let result = storage
            .create_rating(
                student.id,
                CreateRatingRequest {
                    lecture_id: 404,
                    rating: 4,
                    comments: None,
                },
            )
            .await;
        assert!(result.is_err());
    }
}
