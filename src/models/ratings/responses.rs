use serde::Serialize;

use super::entities::Rating;
use crate::models::reports::metrics::average_rating;

// 课堂评分监控：评分明细 + 实时平均分
#[derive(Debug, Serialize)]
pub struct RatingSummary {
    pub items: Vec<Rating>,
    pub total: usize,
    pub avg_rating: Option<f64>,
}

impl From<Vec<Rating>> for RatingSummary {
    fn from(items: Vec<Rating>) -> Self {
        let scores: Vec<i32> = items.iter().map(|r| r.rating).collect();
        Self {
            total: items.len(),
            avg_rating: average_rating(&scores),
            items,
        }
    }
}
