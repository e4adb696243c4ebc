//! 作业与作业提交

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::submissions;
use crate::errors::{LuctError, Result};
use crate::models::{
    assignments::{entities::Assignment, requests::CreateAssignmentRequest},
    submissions::entities::Submission,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_assignment_impl(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let model = ActiveModel {
            class_id: Set(req.class_id),
            created_by: Set(created_by),
            title: Set(req.title),
            description: Set(req.description),
            due_date: Set(req.due_date),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    pub async fn list_assignments_impl(&self, class_id: i64) -> Result<Vec<Assignment>> {
        let result = Assignments::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_assignment()).collect())
    }

    /// 提交作业
    pub async fn create_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
        content: &str,
    ) -> Result<Submission> {
        let model = submissions::ActiveModel {
            assignment_id: Set(assignment_id),
            student_id: Set(student_id),
            content: Set(content.to_string()),
            submitted_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("提交作业失败: {e}")))?;

        Ok(result.into_submission())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{memory_storage, seed_class, seed_user};
    use crate::models::assignments::requests::CreateAssignmentRequest;
    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;

    #[tokio::test]
    async fn test_assignment_and_submission() {
        let storage = memory_storage().await;
        let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
        let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
        let student = seed_user(&storage, "student1", UserRole::Student).await;

        let assignment = storage
            .create_assignment(
                lecturer.id,
                CreateAssignmentRequest {
                    class_id: class.id,
                    title: "Essay".into(),
                    description: None,
                    due_date: Some("2025-04-01".into()),
                },
            )
            .await
            .unwrap();

        let listed = storage.list_assignments(class.id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].due_date.as_deref(), Some("2025-04-01"));

        let submission = storage
            .create_submission(assignment.id, student.id, "My essay")
            .await
            .unwrap();
        assert_eq!(submission.assignment_id, assignment.id);
        assert_eq!(submission.student_id, student.id);

        assert!(storage.get_assignment_by_id(999).await.unwrap().is_none());
    }
}
