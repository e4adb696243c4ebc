use serde::{Deserialize, Serialize};

// 评分实体（只追加）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub id: i64,
    pub lecture_id: i64,
    pub rated_by: i64,
    /// 1..=5
    pub rating: i32,
    pub comments: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
