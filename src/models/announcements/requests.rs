use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateAnnouncementRequest {
    pub class_id: i64,
    pub title: String,
    pub content: String,
}
