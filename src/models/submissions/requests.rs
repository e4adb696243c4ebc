use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateSubmissionRequest {
    pub content: String,
}
