use serde::{Deserialize, Serialize};

// 审阅反馈（只追加）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub lecture_id: i64,
    pub feedback_text: String,
    pub added_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
