use serde::{Deserialize, Serialize};

// 班级作业
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub class_id: i64,
    pub created_by: i64,
    pub title: String,
    pub description: Option<String>,
    /// YYYY-MM-DD
    pub due_date: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
