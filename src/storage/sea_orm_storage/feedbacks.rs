use super::SeaOrmStorage;
use super::lectures::{insert_feedback, insert_notification};
use crate::entity::feedbacks::{Column, Entity as Feedbacks};
use crate::entity::lectures::Entity as Lectures;
use crate::errors::{LuctError, Result};
use crate::models::feedbacks::entities::Feedback;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, TransactionTrait};

impl SeaOrmStorage {
    /// 追加反馈并通知讲师
    ///
    /// 报告不存在时返回 NotFound
    pub async fn create_feedback_impl(
        &self,
        lecture_id: i64,
        added_by: i64,
        feedback_text: &str,
    ) -> Result<Feedback> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LuctError::database_operation(format!("开启事务失败: {e}")))?;

        let lecture = Lectures::find_by_id(lecture_id)
            .one(&txn)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询课堂报告失败: {e}")))?
            .ok_or_else(|| LuctError::not_found("Lecture not found"))?;

        let feedback = insert_feedback(&txn, lecture_id, added_by, feedback_text).await?;
        if lecture.lecturer_id != added_by {
            insert_notification(
                &txn,
                lecture.lecturer_id,
                &format!("New feedback on your lecture report #{lecture_id}"),
            )
            .await?;
        }

        txn.commit()
            .await
            .map_err(|e| LuctError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(feedback.into_feedback())
    }

    /// 列出报告的反馈，按时间先后
    pub async fn list_feedback_for_lecture_impl(&self, lecture_id: i64) -> Result<Vec<Feedback>> {
        let result = Feedbacks::find()
            .filter(Column::LectureId.eq(lecture_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询反馈失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_feedback()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{memory_storage, seed_class, seed_lecture, seed_user};
    use crate::errors::LuctError;
    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;

    #[tokio::test]
    async fn test_feedback_appends_and_notifies() {
        let storage = memory_storage().await;
        let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
        let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
        let prl = seed_user(&storage, "prl_user", UserRole::Prl).await;
        let lecture = seed_lecture(
            &storage, &class, &lecturer, "2025-03-10", "Algebra", "None", 18,
        )
        .await;

        storage
            .create_feedback(lecture.id, prl.id, "First")
            .await
            .unwrap();
        storage
            .create_feedback(lecture.id, prl.id, "Second")
            .await
            .unwrap();

        let feedback = storage.list_feedback_for_lecture(lecture.id).await.unwrap();
        let texts: Vec<_> = feedback.iter().map(|f| f.feedback_text.as_str()).collect();
        assert_eq!(texts, ["First", "Second"]);
        assert_eq!(storage.list_notifications(lecturer.id).await.unwrap().len(), 2);
        assert_eq!(storage.count_feedback_by_author(prl.id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_feedback_on_missing_lecture() {
        let storage = memory_storage().await;
        let prl = seed_user(&storage, "prl_user", UserRole::Prl).await;

        let err = storage.create_feedback(5, prl.id, "Hello").await.unwrap_err();
        assert!(matches!(err, LuctError::NotFound(_)));
    }
}
