use serde::{Deserialize, Serialize};

// 班级实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    pub id: i64,
    pub name: String,
    pub course_id: i64,
    /// 班级容量
    pub total_students: i32,
    pub venue: String,
    pub scheduled_time: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 班级列表项
#[derive(Debug, Clone, Serialize)]
pub struct ClassDetail {
    #[serde(flatten)]
    pub class: Class,
    pub course_name: String,
    pub faculty_name: String,
}
