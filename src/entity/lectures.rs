//! 课堂报告实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lectures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    pub lecturer_id: i64,
    pub week_of_reporting: String,
    pub date_of_lecture: String,
    pub actual_students: i32,
    #[sea_orm(column_type = "Text")]
    pub topic_taught: String,
    #[sea_orm(column_type = "Text")]
    pub learning_outcomes: String,
    #[sea_orm(column_type = "Text")]
    pub recommendations: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub materials_used: Option<String>,
    pub materials_file_url: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub attendance_percentage: f64,
    pub status: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::LecturerId",
        to = "super::users::Column::Id"
    )]
    Lecturer,
    #[sea_orm(has_many = "super::ratings::Entity")]
    Ratings,
    #[sea_orm(has_many = "super::feedbacks::Entity")]
    Feedbacks,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lecturer.def()
    }
}

impl Related<super::ratings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ratings.def()
    }
}

impl Related<super::feedbacks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Feedbacks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_lecture(self) -> crate::models::lectures::entities::Lecture {
        use crate::models::lectures::entities::{Lecture, LectureStatus};

        Lecture {
            id: self.id,
            class_id: self.class_id,
            lecturer_id: self.lecturer_id,
            week_of_reporting: self.week_of_reporting,
            date_of_lecture: self.date_of_lecture,
            actual_students: self.actual_students,
            topic_taught: self.topic_taught,
            learning_outcomes: self.learning_outcomes,
            recommendations: self.recommendations,
            materials_used: self.materials_used,
            materials_file_url: self.materials_file_url,
            attendance_percentage: self.attendance_percentage,
            status: self.status.parse::<LectureStatus>().unwrap_or_else(|e| {
                tracing::warn!("Lecture {} has unreadable status: {}", self.id, e);
                LectureStatus::Pending
            }),
            created_at: super::timestamp_to_datetime(self.created_at),
        }
    }
}
