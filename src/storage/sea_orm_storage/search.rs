//! 单表子串搜索

use super::SeaOrmStorage;
use crate::entity::{courses, lectures, users};
use crate::errors::{LuctError, Result};
use crate::models::{courses::entities::Course, lectures::entities::Lecture, users::entities::User};
use crate::utils::contains_ignore_case;
use sea_orm::{Condition, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// topic_taught 或 recommendations 包含搜索词
    pub async fn search_lectures_impl(&self, term: &str) -> Result<Vec<Lecture>> {
        let backend = self.db.get_database_backend();
        let result = lectures::Entity::find()
            .filter(
                Condition::any()
                    .add(contains_ignore_case(
                        backend,
                        (lectures::Entity, lectures::Column::TopicTaught),
                        term,
                    ))
                    .add(contains_ignore_case(
                        backend,
                        (lectures::Entity, lectures::Column::Recommendations),
                        term,
                    )),
            )
            .order_by_asc(lectures::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("搜索课堂报告失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_lecture()).collect())
    }

    /// name 或 code 包含搜索词
    pub async fn search_courses_impl(&self, term: &str) -> Result<Vec<Course>> {
        let backend = self.db.get_database_backend();
        let result = courses::Entity::find()
            .filter(
                Condition::any()
                    .add(contains_ignore_case(
                        backend,
                        (courses::Entity, courses::Column::Name),
                        term,
                    ))
                    .add(contains_ignore_case(
                        backend,
                        (courses::Entity, courses::Column::Code),
                        term,
                    )),
            )
            .order_by_asc(courses::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("搜索课程失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_course()).collect())
    }

    /// full_name 或 email 包含搜索词
    pub async fn search_users_impl(&self, term: &str) -> Result<Vec<User>> {
        let backend = self.db.get_database_backend();
        let result = users::Entity::find()
            .filter(
                Condition::any()
                    .add(contains_ignore_case(
                        backend,
                        (users::Entity, users::Column::FullName),
                        term,
                    ))
                    .add(contains_ignore_case(
                        backend,
                        (users::Entity, users::Column::Email),
                        term,
                    )),
            )
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("搜索用户失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_user()).collect())
    }
}
