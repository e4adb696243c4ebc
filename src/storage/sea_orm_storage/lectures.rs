//! 课堂报告存储操作

use super::SeaOrmStorage;
use crate::entity::lectures::{ActiveModel, Entity as Lectures};
use crate::entity::{feedbacks, notifications};
use crate::errors::{LuctError, Result};
use crate::models::lectures::{
    entities::{Lecture, LectureStatus},
    requests::NewLecture,
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set, TransactionTrait};

impl SeaOrmStorage {
    /// 创建课堂报告，初始状态为 Pending
    pub async fn create_lecture_impl(&self, req: NewLecture) -> Result<Lecture> {
        let model = ActiveModel {
            class_id: Set(req.class_id),
            lecturer_id: Set(req.lecturer_id),
            week_of_reporting: Set(req.week_of_reporting),
            date_of_lecture: Set(req.date_of_lecture),
            actual_students: Set(req.actual_students),
            topic_taught: Set(req.topic_taught),
            learning_outcomes: Set(req.learning_outcomes),
            recommendations: Set(req.recommendations),
            materials_used: Set(req.materials_used),
            materials_file_url: Set(req.materials_file_url),
            attendance_percentage: Set(req.attendance_percentage),
            status: Set(LectureStatus::Pending.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("创建课堂报告失败: {e}")))?;

        Ok(result.into_lecture())
    }

    /// 通过 ID 获取课堂报告
    pub async fn get_lecture_by_id_impl(&self, id: i64) -> Result<Option<Lecture>> {
        let result = Lectures::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询课堂报告失败: {e}")))?;

        Ok(result.map(|m| m.into_lecture()))
    }

    /// 审核报告
    ///
    /// 状态更新、反馈写入和讲师通知在同一事务中提交，任一步失败全部回滚
    pub async fn review_lecture_impl(
        &self,
        lecture_id: i64,
        status: LectureStatus,
        reviewer_id: i64,
        feedback: Option<String>,
    ) -> Result<Option<Lecture>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LuctError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(existing) = Lectures::find_by_id(lecture_id)
            .one(&txn)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询课堂报告失败: {e}")))?
        else {
            // 未提交的事务在 drop 时回滚
            return Ok(None);
        };

        let lecturer_id = existing.lecturer_id;
        let mut model: ActiveModel = existing.into();
        model.status = Set(status.to_string());
        let updated = model
            .update(&txn)
            .await
            .map_err(|e| LuctError::database_operation(format!("更新报告状态失败: {e}")))?;

        let feedback = feedback.filter(|text| !text.trim().is_empty());
        let message = match &feedback {
            Some(_) => format!("Your lecture report #{lecture_id} was marked {status} with feedback"),
            None => format!("Your lecture report #{lecture_id} was marked {status}"),
        };

        if let Some(text) = feedback {
            insert_feedback(&txn, lecture_id, reviewer_id, &text).await?;
        }
        insert_notification(&txn, lecturer_id, &message).await?;

        txn.commit()
            .await
            .map_err(|e| LuctError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(updated.into_lecture()))
    }
}

// 在给定连接（或事务）上写入反馈
pub(super) async fn insert_feedback<C: ConnectionTrait>(
    conn: &C,
    lecture_id: i64,
    added_by: i64,
    feedback_text: &str,
) -> Result<feedbacks::Model> {
    feedbacks::ActiveModel {
        lecture_id: Set(lecture_id),
        feedback_text: Set(feedback_text.to_string()),
        added_by: Set(added_by),
        created_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    }
    .insert(conn)
    .await
    .map_err(|e| LuctError::database_operation(format!("写入反馈失败: {e}")))
}

// 在给定连接（或事务）上写入通知
pub(super) async fn insert_notification<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
    message: &str,
) -> Result<notifications::Model> {
    notifications::ActiveModel {
        user_id: Set(user_id),
        message: Set(message.to_string()),
        is_read: Set(false),
        created_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    }
    .insert(conn)
    .await
    .map_err(|e| LuctError::database_operation(format!("写入通知失败: {e}")))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{memory_storage, seed_class, seed_lecture, seed_user};
    use crate::models::lectures::entities::LectureStatus;
    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;

    #[tokio::test]
    async fn test_new_lecture_is_pending_with_stored_attendance() {
        let storage = memory_storage().await;
        let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
        let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;

        let lecture = seed_lecture(
            &storage, &class, &lecturer, "2025-03-10", "Algebra", "None", 18,
        )
        .await;
        assert_eq!(lecture.status, LectureStatus::Pending);
        assert_eq!(lecture.attendance_percentage, 45.0);

        let stored = storage.get_lecture_by_id(lecture.id).await.unwrap().unwrap();
        assert_eq!(stored.attendance_percentage, 45.0);
    }

    #[tokio::test]
    async fn test_review_writes_status_feedback_and_notification() {
        let storage = memory_storage().await;
        let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
        let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
        let prl = seed_user(&storage, "prl_user", UserRole::Prl).await;
        let lecture = seed_lecture(
            &storage, &class, &lecturer, "2025-03-10", "Algebra", "None", 18,
        )
        .await;

        let reviewed = storage
            .review_lecture(
                lecture.id,
                LectureStatus::Approved,
                prl.id,
                Some("Well structured".into()),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reviewed.status, LectureStatus::Approved);

        let feedback = storage.list_feedback_for_lecture(lecture.id).await.unwrap();
        assert_eq!(feedback.len(), 1);
        assert_eq!(feedback[0].added_by, prl.id);

        let notes = storage.list_notifications(lecturer.id).await.unwrap();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].message.contains("Approved"));
    }

    #[tokio::test]
    async fn test_review_missing_lecture_changes_nothing() {
        let storage = memory_storage().await;
        let prl = seed_user(&storage, "prl_user", UserRole::Prl).await;

        let result = storage
            .review_lecture(77, LectureStatus::Reviewed, prl.id, Some("x".into()))
            .await
            .unwrap();
        assert!(result.is_none());
        assert_eq!(storage.count_feedback_by_author(prl.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_failed_notification_rolls_back_review() {
        use sea_orm::ConnectionTrait;

        let storage = memory_storage().await;
        let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
        let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
        let prl = seed_user(&storage, "prl_user", UserRole::Prl).await;
        let lecture = seed_lecture(
            &storage, &class, &lecturer, "2025-03-10", "Algebra", "None", 18,
        )
        .await;

        // 通知写入是事务的最后一步，让它失败
        storage
            .db
            .execute_unprepared("DROP TABLE notifications")
            .await
            .unwrap();

        let result = storage
            .review_lecture(
                lecture.id,
                LectureStatus::Approved,
                prl.id,
                Some("Well structured".into()),
            )
            .await;
        assert!(result.is_err());

        let stored = storage.get_lecture_by_id(lecture.id).await.unwrap().unwrap();
        assert_eq!(stored.status, LectureStatus::Pending);
        assert!(storage
            .list_feedback_for_lecture(lecture.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_blank_review_feedback_is_skipped() {
        let storage = memory_storage().await;
        let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
        let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
        let pl = seed_user(&storage, "pl_user", UserRole::Pl).await;
        let lecture = seed_lecture(
            &storage, &class, &lecturer, "2025-03-10", "Algebra", "None", 18,
        )
        .await;

        storage
            .review_lecture(lecture.id, LectureStatus::Reviewed, pl.id, Some("  ".into()))
            .await
            .unwrap();
        assert!(storage
            .list_feedback_for_lecture(lecture.id)
            .await
            .unwrap()
            .is_empty());
    }
}
