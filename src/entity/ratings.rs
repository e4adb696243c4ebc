//! 评分实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ratings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub lecture_id: i64,
    pub rated_by: i64,
    pub rating: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lectures::Entity",
        from = "Column::LectureId",
        to = "super::lectures::Column::Id"
    )]
    Lecture,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::RatedBy",
        to = "super::users::Column::Id"
    )]
    RatedBy,
}

impl Related<super::lectures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lecture.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_rating(self) -> crate::models::ratings::entities::Rating {
        crate::models::ratings::entities::Rating {
            id: self.id,
            lecture_id: self.lecture_id,
            rated_by: self.rated_by,
            rating: self.rating,
            comments: self.comments,
            created_at: super::timestamp_to_datetime(self.created_at),
        }
    }
}
