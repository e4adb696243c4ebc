//! 学院与课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::faculties::{
    ActiveModel as FacultyActiveModel, Column as FacultyColumn, Entity as Faculties,
};
use crate::entity::{courses, timestamp_to_datetime, users};
use crate::errors::{LuctError, Result};
use crate::models::courses::{
    entities::{Course, CourseDetail, Faculty},
    requests::CreateCourseRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

#[derive(Debug, FromQueryResult)]
struct CourseDetailRow {
    id: i64,
    name: String,
    code: String,
    faculty_id: i64,
    lecturer_id: Option<i64>,
    created_at: i64,
    faculty_name: String,
    lecturer_name: Option<String>,
}

impl CourseDetailRow {
    fn into_detail(self) -> CourseDetail {
        CourseDetail {
            course: Course {
                id: self.id,
                name: self.name,
                code: self.code,
                faculty_id: self.faculty_id,
                lecturer_id: self.lecturer_id,
                created_at: timestamp_to_datetime(self.created_at),
            },
            faculty_name: self.faculty_name,
            lecturer_name: self.lecturer_name,
        }
    }
}

impl SeaOrmStorage {
    /// 列出所有学院
    pub async fn list_faculties_impl(&self) -> Result<Vec<Faculty>> {
        let result = Faculties::find()
            .order_by_asc(FacultyColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询学院失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_faculty()).collect())
    }

    pub async fn get_faculty_by_id_impl(&self, id: i64) -> Result<Option<Faculty>> {
        let result = Faculties::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询学院失败: {e}")))?;

        Ok(result.map(|m| m.into_faculty()))
    }

    pub async fn create_faculty_impl(&self, name: &str) -> Result<Faculty> {
        let model = FacultyActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("创建学院失败: {e}")))?;

        Ok(result.into_faculty())
    }

    pub async fn count_faculties_impl(&self) -> Result<u64> {
        Faculties::find()
            .count(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("统计学院失败: {e}")))
    }

    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let model = ActiveModel {
            name: Set(req.name),
            code: Set(req.code),
            faculty_id: Set(req.faculty_id),
            lecturer_id: Set(None),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    pub async fn get_course_by_code_impl(&self, code: &str) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 列出课程，附带学院名称和已指派讲师
    pub async fn list_courses_impl(&self) -> Result<Vec<CourseDetail>> {
        let rows = Courses::find()
            .select_only()
            .columns([
                Column::Id,
                Column::Name,
                Column::Code,
                Column::FacultyId,
                Column::LecturerId,
                Column::CreatedAt,
            ])
            .column_as(FacultyColumn::Name, "faculty_name")
            .column_as(users::Column::FullName, "lecturer_name")
            .join(JoinType::InnerJoin, courses::Relation::Faculty.def())
            .join(JoinType::LeftJoin, courses::Relation::Lecturer.def())
            .order_by_asc(Column::Id)
            .into_model::<CourseDetailRow>()
            .all(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(rows.into_iter().map(CourseDetailRow::into_detail).collect())
    }

    /// 指派讲师，课程不存在时返回 None
    pub async fn assign_lecturer_impl(
        &self,
        course_id: i64,
        lecturer_id: i64,
    ) -> Result<Option<Course>> {
        let Some(existing) = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询课程失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.lecturer_id = Set(Some(lecturer_id));

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("指派讲师失败: {e}")))?;

        Ok(Some(result.into_course()))
    }
}
