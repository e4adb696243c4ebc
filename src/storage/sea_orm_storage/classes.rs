use super::SeaOrmStorage;
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::entity::{classes, courses, faculties, timestamp_to_datetime};
use crate::errors::{LuctError, Result};
use crate::models::classes::{
    entities::{Class, ClassDetail},
    requests::CreateClassRequest,
};
use sea_orm::{
    ActiveModelTrait, EntityTrait, FromQueryResult, JoinType, QueryOrder, QuerySelect,
    RelationTrait, Set,
};

#[derive(Debug, FromQueryResult)]
struct ClassDetailRow {
    id: i64,
    name: String,
    course_id: i64,
    total_students: i32,
    venue: String,
    scheduled_time: String,
    created_at: i64,
    course_name: String,
    faculty_name: String,
}

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let model = ActiveModel {
            name: Set(req.name),
            course_id: Set(req.course_id),
            total_students: Set(req.total_students),
            venue: Set(req.venue),
            scheduled_time: Set(req.scheduled_time),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 列出班级，附带课程与学院名称
    pub async fn list_classes_impl(&self) -> Result<Vec<ClassDetail>> {
        let rows = Classes::find()
            .select_only()
            .columns([
                Column::Id,
                Column::Name,
                Column::CourseId,
                Column::TotalStudents,
                Column::Venue,
                Column::ScheduledTime,
                Column::CreatedAt,
            ])
            .column_as(courses::Column::Name, "course_name")
            .column_as(faculties::Column::Name, "faculty_name")
            .join(JoinType::InnerJoin, classes::Relation::Course.def())
            .join(JoinType::InnerJoin, courses::Relation::Faculty.def())
            .order_by_asc(Column::Id)
            .into_model::<ClassDetailRow>()
            .all(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|row| ClassDetail {
                class: Class {
                    id: row.id,
                    name: row.name,
                    course_id: row.course_id,
                    total_students: row.total_students,
                    venue: row.venue,
                    scheduled_time: row.scheduled_time,
                    created_at: timestamp_to_datetime(row.created_at),
                },
                course_name: row.course_name,
                faculty_name: row.faculty_name,
            })
            .collect())
    }
}
