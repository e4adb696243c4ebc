use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateRatingRequest {
    pub lecture_id: i64,
    pub rating: i32,
    pub comments: Option<String>,
}
