use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub class_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
}
