//! 存储层测试辅助：内存 SQLite + 真实迁移

use super::SeaOrmStorage;
use crate::models::{
    classes::{entities::Class, requests::CreateClassRequest},
    courses::{
        entities::{Course, Faculty},
        requests::CreateCourseRequest,
    },
    lectures::{entities::Lecture, requests::NewLecture},
    reports::metrics::attendance_percentage,
    users::{
        entities::{User, UserRole},
        requests::NewUser,
    },
};
use crate::storage::Storage;

pub(crate) async fn memory_storage() -> SeaOrmStorage {
    SeaOrmStorage::connect("sqlite::memory:", 1, 5)
        .await
        .expect("in-memory sqlite should migrate")
}

pub(crate) async fn seed_user(storage: &SeaOrmStorage, username: &str, role: UserRole) -> User {
    storage
        .create_user(NewUser {
            username: username.to_string(),
            password_hash: "not-a-real-hash".to_string(),
            role,
            full_name: format!("{username} full"),
            email: format!("{username}@luct.ac.ls"),
            student_id: None,
        })
        .await
        .expect("seed user")
}

/// 学院 -> 课程 -> 班级
pub(crate) async fn seed_class(
    storage: &SeaOrmStorage,
    faculty_name: &str,
    course_code: &str,
    total_students: i32,
) -> (Faculty, Course, Class) {
    let faculty = storage
        .create_faculty(faculty_name)
        .await
        .expect("seed faculty");
    let course = storage
        .create_course(CreateCourseRequest {
            name: format!("{course_code} course"),
            code: course_code.to_string(),
            faculty_id: faculty.id,
        })
        .await
        .expect("seed course");
    let class = storage
        .create_class(CreateClassRequest {
            name: format!("{course_code}-A"),
            course_id: course.id,
            total_students,
            venue: "Hall 1".to_string(),
            scheduled_time: "Mon 08:30".to_string(),
        })
        .await
        .expect("seed class");
    (faculty, course, class)
}

pub(crate) async fn seed_lecture(
    storage: &SeaOrmStorage,
    class: &Class,
    lecturer: &User,
    date: &str,
    topic: &str,
    recommendations: &str,
    actual_students: i32,
) -> Lecture {
    storage
        .create_lecture(NewLecture {
            class_id: class.id,
            lecturer_id: lecturer.id,
            week_of_reporting: "Week 1".to_string(),
            date_of_lecture: date.to_string(),
            actual_students,
            topic_taught: topic.to_string(),
            learning_outcomes: "Outcomes".to_string(),
            recommendations: recommendations.to_string(),
            materials_used: None,
            materials_file_url: None,
            attendance_percentage: attendance_percentage(actual_students, class.total_students),
        })
        .await
        .expect("seed lecture")
}
