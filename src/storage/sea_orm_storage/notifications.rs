use super::SeaOrmStorage;
use super::lectures::insert_notification;
use crate::entity::notifications::{Column, Entity as Notifications};
use crate::errors::{LuctError, Result};
use crate::models::notifications::entities::Notification;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    pub async fn create_notification_impl(
        &self,
        user_id: i64,
        message: &str,
    ) -> Result<Notification> {
        let result = insert_notification(&self.db, user_id, message).await?;
        Ok(result.into_notification())
    }

    /// 用户的通知，最新在前
    pub async fn list_notifications_impl(&self, user_id: i64) -> Result<Vec<Notification>> {
        let result = Notifications::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询通知失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_notification()).collect())
    }

    /// 标记已读，通知不存在或不属于该用户时返回 false
    pub async fn mark_notification_read_impl(&self, id: i64, user_id: i64) -> Result<bool> {
        let result = Notifications::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("更新通知失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{memory_storage, seed_user};
    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;

    #[tokio::test]
    async fn test_only_owner_can_mark_read() {
        let storage = memory_storage().await;
        let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
        let student = seed_user(&storage, "student1", UserRole::Student).await;

        let note = storage
            .create_notification(lecturer.id, "Report reviewed")
            .await
            .unwrap();
        assert!(!note.is_read);

        assert!(!storage.mark_notification_read(note.id, student.id).await.unwrap());
        assert!(storage.mark_notification_read(note.id, lecturer.id).await.unwrap());

        let notes = storage.list_notifications(lecturer.id).await.unwrap();
        assert!(notes[0].is_read);
        assert!(storage.list_notifications(student.id).await.unwrap().is_empty());
    }
}
