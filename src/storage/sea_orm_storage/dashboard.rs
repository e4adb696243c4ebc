//! 仪表盘计数查询

use super::SeaOrmStorage;
use crate::entity::lectures::{Column, Entity as Lectures};
use crate::entity::{feedbacks, ratings, timestamp_to_datetime};
use crate::errors::{LuctError, Result};
use crate::models::lectures::entities::LectureStatus;
use sea_orm::sea_query::Query;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect};

impl SeaOrmStorage {
    /// 学生尚未评分的课堂数
    pub async fn count_unrated_lectures_impl(&self, student_id: i64) -> Result<u64> {
        let rated = Query::select()
            .column(ratings::Column::LectureId)
            .from(ratings::Entity)
            .and_where(ratings::Column::RatedBy.eq(student_id))
            .to_owned();

        Lectures::find()
            .filter(Column::Id.not_in_subquery(rated))
            .count(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("统计未评分课堂失败: {e}")))
    }

    pub async fn latest_lecture_created_at_impl(
        &self,
    ) -> Result<Option<chrono::DateTime<chrono::Utc>>> {
        let latest: Option<Option<i64>> = Lectures::find()
            .select_only()
            .column_as(Column::CreatedAt.max(), "latest")
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询最新报告失败: {e}")))?;

        Ok(latest.flatten().map(timestamp_to_datetime))
    }

    /// 按讲师和状态统计报告数，两个条件都可省略
    pub async fn count_lectures_impl(
        &self,
        lecturer_id: Option<i64>,
        status: Option<LectureStatus>,
    ) -> Result<u64> {
        let mut query = Lectures::find();
        if let Some(lecturer_id) = lecturer_id {
            query = query.filter(Column::LecturerId.eq(lecturer_id));
        }
        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status.to_string()));
        }

        query
            .count(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("统计课堂报告失败: {e}")))
    }

    /// 讲师提交过报告的不同班级数
    pub async fn count_classes_reported_by_impl(&self, lecturer_id: i64) -> Result<u64> {
        let class_ids: Vec<i64> = Lectures::find()
            .select_only()
            .column(Column::ClassId)
            .distinct()
            .filter(Column::LecturerId.eq(lecturer_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("统计讲师班级失败: {e}")))?;

        Ok(class_ids.len() as u64)
    }

    pub async fn count_feedback_by_author_impl(&self, user_id: i64) -> Result<u64> {
        feedbacks::Entity::find()
            .filter(feedbacks::Column::AddedBy.eq(user_id))
            .count(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("统计反馈失败: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{memory_storage, seed_class, seed_lecture, seed_user};
    use crate::models::lectures::entities::LectureStatus;
    use crate::models::ratings::requests::CreateRatingRequest;
    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;

    #[tokio::test]
    async fn test_unrated_count_excludes_own_ratings_only() {
        let storage = memory_storage().await;
        let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
        let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
        let student = seed_user(&storage, "student1", UserRole::Student).await;
        let other = seed_user(&storage, "student2", UserRole::Student).await;
        let a = seed_lecture(&storage, &class, &lecturer, "2025-03-10", "A", "B", 1).await;
        seed_lecture(&storage, &class, &lecturer, "2025-03-11", "C", "D", 1).await;

        assert_eq!(storage.count_unrated_lectures(student.id).await.unwrap(), 2);

        storage
            .create_rating(
                other.id,
                CreateRatingRequest {
                    lecture_id: a.id,
                    rating: 4,
                    comments: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(storage.count_unrated_lectures(student.id).await.unwrap(), 2);
        assert_eq!(storage.count_unrated_lectures(other.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_lecture_counters() {
        let storage = memory_storage().await;
        let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
        let (_, _, other_class) = seed_class(&storage, "FBMG", "BBM201", 30).await;
        let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
        let pl = seed_user(&storage, "pl_user", UserRole::Pl).await;

        assert!(storage.latest_lecture_created_at().await.unwrap().is_none());

        let first = seed_lecture(&storage, &class, &lecturer, "2025-03-10", "A", "B", 1).await;
        seed_lecture(&storage, &class, &lecturer, "2025-03-11", "C", "D", 1).await;
        seed_lecture(&storage, &other_class, &lecturer, "2025-03-12", "E", "F", 1).await;

        storage
            .review_lecture(first.id, LectureStatus::Approved, pl.id, None)
            .await
            .unwrap();

        assert_eq!(storage.count_lectures(None, None).await.unwrap(), 3);
        assert_eq!(
            storage
                .count_lectures(Some(lecturer.id), Some(LectureStatus::Pending))
                .await
                .unwrap(),
            2
        );
        assert_eq!(storage.count_classes_reported_by(lecturer.id).await.unwrap(), 2);
        assert_eq!(storage.count_classes_reported_by(pl.id).await.unwrap(), 0);
        assert!(storage.latest_lecture_created_at().await.unwrap().is_some());
    }
}
