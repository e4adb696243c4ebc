//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod announcements;
mod assignments;
mod classes;
mod courses;
mod dashboard;
mod feedbacks;
mod lectures;
mod notifications;
mod ratings;
mod reports;
mod search;
mod users;

#[cfg(test)]
pub(crate) mod test_support;

use crate::config::AppConfig;
use crate::errors::{LuctError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按全局配置创建存储实例并运行迁移
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 连接指定数据库并运行迁移
    pub async fn connect(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout).await?
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| LuctError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");
        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| LuctError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .pragma("temp_store", "memory");

        // 内存库每个连接独立，只能使用单连接且不启用 WAL
        let max_connections = if in_memory {
            1
        } else {
            opt = opt
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("wal_autocheckpoint", "1000");
            pool_size.max(1)
        };

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(timeout));
        if in_memory {
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        } else {
            pool_options = pool_options
                .test_before_acquire(true)
                .idle_timeout(Duration::from_secs(300));
        }

        let pool = pool_options
            .connect_with(opt)
            .await
            .map_err(|e| LuctError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(pool_size.min(5))
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| LuctError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(LuctError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    announcements::{entities::Announcement, requests::CreateAnnouncementRequest},
    assignments::{entities::Assignment, requests::CreateAssignmentRequest},
    auth::requests::UpdateProfileRequest,
    classes::{
        entities::{Class, ClassDetail},
        requests::CreateClassRequest,
    },
    courses::{
        entities::{Course, CourseDetail, Faculty},
        requests::CreateCourseRequest,
    },
    feedbacks::entities::Feedback,
    lectures::{
        entities::{Lecture, LectureStatus},
        requests::NewLecture,
    },
    notifications::entities::Notification,
    ratings::{entities::Rating, requests::CreateRatingRequest},
    reports::{entities::ReportRow, requests::ReportScope},
    submissions::entities::Submission,
    users::{
        entities::{User, UserRole},
        requests::NewUser,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: NewUser) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn update_user_profile(
        &self,
        id: i64,
        update: UpdateProfileRequest,
    ) -> Result<Option<User>> {
        self.update_user_profile_impl(id, update).await
    }

    async fn update_user_password(&self, id: i64, password_hash: &str) -> Result<bool> {
        self.update_user_password_impl(id, password_hash).await
    }

    async fn count_users_by_role(&self, role: UserRole) -> Result<u64> {
        self.count_users_by_role_impl(role, false).await
    }

    async fn count_active_users_by_role(&self, role: UserRole) -> Result<u64> {
        self.count_users_by_role_impl(role, true).await
    }

    // 学院与课程模块
    async fn list_faculties(&self) -> Result<Vec<Faculty>> {
        self.list_faculties_impl().await
    }

    async fn get_faculty_by_id(&self, id: i64) -> Result<Option<Faculty>> {
        self.get_faculty_by_id_impl(id).await
    }

    async fn create_faculty(&self, name: &str) -> Result<Faculty> {
        self.create_faculty_impl(name).await
    }

    async fn count_faculties(&self) -> Result<u64> {
        self.count_faculties_impl().await
    }

    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>> {
        self.get_course_by_code_impl(code).await
    }

    async fn list_courses(&self) -> Result<Vec<CourseDetail>> {
        self.list_courses_impl().await
    }

    async fn assign_lecturer(&self, course_id: i64, lecturer_id: i64) -> Result<Option<Course>> {
        self.assign_lecturer_impl(course_id, lecturer_id).await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(id).await
    }

    async fn list_classes(&self) -> Result<Vec<ClassDetail>> {
        self.list_classes_impl().await
    }

    // 课堂报告模块
    async fn create_lecture(&self, lecture: NewLecture) -> Result<Lecture> {
        self.create_lecture_impl(lecture).await
    }

    async fn get_lecture_by_id(&self, id: i64) -> Result<Option<Lecture>> {
        self.get_lecture_by_id_impl(id).await
    }

    async fn review_lecture(
        &self,
        lecture_id: i64,
        status: LectureStatus,
        reviewer_id: i64,
        feedback: Option<String>,
    ) -> Result<Option<Lecture>> {
        self.review_lecture_impl(lecture_id, status, reviewer_id, feedback)
            .await
    }

    async fn list_reports(&self, scope: ReportScope) -> Result<Vec<ReportRow>> {
        self.list_reports_impl(scope).await
    }

    // 反馈与评分模块
    async fn create_feedback(
        &self,
        lecture_id: i64,
        added_by: i64,
        feedback_text: &str,
    ) -> Result<Feedback> {
        self.create_feedback_impl(lecture_id, added_by, feedback_text)
            .await
    }

    async fn list_feedback_for_lecture(&self, lecture_id: i64) -> Result<Vec<Feedback>> {
        self.list_feedback_for_lecture_impl(lecture_id).await
    }

    async fn create_rating(&self, rated_by: i64, rating: CreateRatingRequest) -> Result<Rating> {
        self.create_rating_impl(rated_by, rating).await
    }

    async fn list_ratings_for_lecture(&self, lecture_id: i64) -> Result<Vec<Rating>> {
        self.list_ratings_for_lecture_impl(lecture_id).await
    }

    // 搜索模块
    async fn search_lectures(&self, term: &str) -> Result<Vec<Lecture>> {
        self.search_lectures_impl(term).await
    }

    async fn search_courses(&self, term: &str) -> Result<Vec<Course>> {
        self.search_courses_impl(term).await
    }

    async fn search_users(&self, term: &str) -> Result<Vec<User>> {
        self.search_users_impl(term).await
    }

    // 仪表盘模块
    async fn count_unrated_lectures(&self, student_id: i64) -> Result<u64> {
        self.count_unrated_lectures_impl(student_id).await
    }

    async fn latest_lecture_created_at(&self) -> Result<Option<chrono::DateTime<chrono::Utc>>> {
        self.latest_lecture_created_at_impl().await
    }

    async fn count_lectures(
        &self,
        lecturer_id: Option<i64>,
        status: Option<LectureStatus>,
    ) -> Result<u64> {
        self.count_lectures_impl(lecturer_id, status).await
    }

    async fn count_classes_reported_by(&self, lecturer_id: i64) -> Result<u64> {
        self.count_classes_reported_by_impl(lecturer_id).await
    }

    async fn count_feedback_by_author(&self, user_id: i64) -> Result<u64> {
        self.count_feedback_by_author_impl(user_id).await
    }

    // 班级公告与作业模块
    async fn create_announcement(
        &self,
        posted_by: i64,
        announcement: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        self.create_announcement_impl(posted_by, announcement).await
    }

    async fn list_announcements(&self, class_id: i64) -> Result<Vec<Announcement>> {
        self.list_announcements_impl(class_id).await
    }

    async fn create_assignment(
        &self,
        created_by: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(created_by, assignment).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_assignments(&self, class_id: i64) -> Result<Vec<Assignment>> {
        self.list_assignments_impl(class_id).await
    }

    async fn create_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        content: &str,
    ) -> Result<Submission> {
        self.create_submission_impl(assignment_id, student_id, content)
            .await
    }

    // 通知模块
    async fn create_notification(&self, user_id: i64, message: &str) -> Result<Notification> {
        self.create_notification_impl(user_id, message).await
    }

    async fn list_notifications(&self, user_id: i64) -> Result<Vec<Notification>> {
        self.list_notifications_impl(user_id).await
    }

    async fn mark_notification_read(&self, id: i64, user_id: i64) -> Result<bool> {
        self.mark_notification_read_impl(id, user_id).await
    }
}
