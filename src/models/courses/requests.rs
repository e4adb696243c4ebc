use serde::Deserialize;

// 创建课程请求
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub code: String,
    pub faculty_id: i64,
}

// 指派讲师请求
#[derive(Debug, Deserialize)]
pub struct AssignLecturerRequest {
    pub course_id: i64,
    pub lecturer_id: i64,
}
