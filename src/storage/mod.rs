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

use crate::errors::Result;
use std::sync::Arc;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: NewUser) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 更新个人资料
    async fn update_user_profile(
        &self,
        id: i64,
        update: UpdateProfileRequest,
    ) -> Result<Option<User>>;
    // 更新密码哈希
    async fn update_user_password(&self, id: i64, password_hash: &str) -> Result<bool>;
    // 统计指定角色的用户数
    async fn count_users_by_role(&self, role: UserRole) -> Result<u64>;
    // 统计指定角色的活跃用户数
    async fn count_active_users_by_role(&self, role: UserRole) -> Result<u64>;

    /// 学院与课程
    async fn list_faculties(&self) -> Result<Vec<Faculty>>;
    async fn get_faculty_by_id(&self, id: i64) -> Result<Option<Faculty>>;
    async fn create_faculty(&self, name: &str) -> Result<Faculty>;
    async fn count_faculties(&self) -> Result<u64>;
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>>;
    async fn list_courses(&self) -> Result<Vec<CourseDetail>>;
    // 指派课程讲师
    async fn assign_lecturer(&self, course_id: i64, lecturer_id: i64) -> Result<Option<Course>>;

    /// 班级管理方法
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    async fn get_class_by_id(&self, id: i64) -> Result<Option<Class>>;
    async fn list_classes(&self) -> Result<Vec<ClassDetail>>;

    /// 课堂报告
    async fn create_lecture(&self, lecture: NewLecture) -> Result<Lecture>;
    async fn get_lecture_by_id(&self, id: i64) -> Result<Option<Lecture>>;
    // 更新审核状态，可附带反馈，并通知讲师（同一事务）
    async fn review_lecture(
        &self,
        lecture_id: i64,
        status: LectureStatus,
        reviewer_id: i64,
        feedback: Option<String>,
    ) -> Result<Option<Lecture>>;
    // 按查询范围列出报告视图
    async fn list_reports(&self, scope: ReportScope) -> Result<Vec<ReportRow>>;

    /// 反馈与评分
    async fn create_feedback(
        &self,
        lecture_id: i64,
        added_by: i64,
        feedback_text: &str,
    ) -> Result<Feedback>;
    async fn list_feedback_for_lecture(&self, lecture_id: i64) -> Result<Vec<Feedback>>;
    async fn create_rating(&self, rated_by: i64, rating: CreateRatingRequest) -> Result<Rating>;
    async fn list_ratings_for_lecture(&self, lecture_id: i64) -> Result<Vec<Rating>>;

    /// 搜索（单表，大小写不敏感的子串匹配）
    async fn search_lectures(&self, term: &str) -> Result<Vec<Lecture>>;
    async fn search_courses(&self, term: &str) -> Result<Vec<Course>>;
    async fn search_users(&self, term: &str) -> Result<Vec<User>>;

    /// 仪表盘计数
    // 学生尚未评分的课堂数
    async fn count_unrated_lectures(&self, student_id: i64) -> Result<u64>;
    // 最新报告的创建时间
    async fn latest_lecture_created_at(&self) -> Result<Option<chrono::DateTime<chrono::Utc>>>;
    async fn count_lectures(
        &self,
        lecturer_id: Option<i64>,
        status: Option<LectureStatus>,
    ) -> Result<u64>;
    async fn count_classes_reported_by(&self, lecturer_id: i64) -> Result<u64>;
    async fn count_feedback_by_author(&self, user_id: i64) -> Result<u64>;

    /// 班级公告与作业
    async fn create_announcement(
        &self,
        posted_by: i64,
        announcement: CreateAnnouncementRequest,
    ) -> Result<Announcement>;
    async fn list_announcements(&self, class_id: i64) -> Result<Vec<Announcement>>;
    async fn create_assignment(
        &self,
        created_by: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    async fn list_assignments(&self, class_id: i64) -> Result<Vec<Assignment>>;
    async fn create_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        content: &str,
    ) -> Result<Submission>;

    /// 通知
    async fn create_notification(&self, user_id: i64, message: &str) -> Result<Notification>;
    async fn list_notifications(&self, user_id: i64) -> Result<Vec<Notification>>;
    // 仅能标记自己的通知
    async fn mark_notification_read(&self, id: i64, user_id: i64) -> Result<bool>;
}

/// 按配置创建存储后端（连接数据库并完成迁移）
pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
