use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQueryParams {
    pub q: Option<String>,
}
