use serde::{Deserialize, Serialize};

// 学院
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Faculty {
    pub id: i64,
    pub name: String,
}

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub faculty_id: i64,
    pub lecturer_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 课程列表项（带学院与讲师名称）
#[derive(Debug, Clone, Serialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: Course,
    pub faculty_name: String,
    pub lecturer_name: Option<String>,
}
