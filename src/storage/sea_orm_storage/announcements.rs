use super::SeaOrmStorage;
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements};
use crate::errors::{LuctError, Result};
use crate::models::announcements::{
    entities::Announcement, requests::CreateAnnouncementRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_announcement_impl(
        &self,
        posted_by: i64,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        let model = ActiveModel {
            class_id: Set(req.class_id),
            posted_by: Set(posted_by),
            title: Set(req.title),
            content: Set(req.content),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("创建公告失败: {e}")))?;

        Ok(result.into_announcement())
    }

    /// 班级公告，最新在前
    pub async fn list_announcements_impl(&self, class_id: i64) -> Result<Vec<Announcement>> {
        let result = Announcements::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询公告失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_announcement()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{memory_storage, seed_class, seed_user};
    use crate::models::announcements::requests::CreateAnnouncementRequest;
    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;

    #[tokio::test]
    async fn test_announcements_are_scoped_to_class() {
        let storage = memory_storage().await;
        let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
        let (_, _, other) = seed_class(&storage, "FBMG", "BBM201", 30).await;
        let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;

        for title in ["Quiz", "Venue change"] {
            storage
                .create_announcement(
                    lecturer.id,
                    CreateAnnouncementRequest {
                        class_id: class.id,
                        title: title.into(),
                        content: "Details".into(),
                    },
                )
                .await
                .unwrap();
        }

        let listed = storage.list_announcements(class.id).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].title, "Venue change");
        assert!(storage.list_announcements(other.id).await.unwrap().is_empty());
    }
}
