use serde::Deserialize;

// 创建班级请求
#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    pub course_id: i64,
    #[serde(default)]
    pub total_students: i32,
    pub venue: String,
    pub scheduled_time: String,
}
