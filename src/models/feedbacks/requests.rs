use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateFeedbackRequest {
    pub lecture_id: i64,
    pub feedback_text: String,
}
