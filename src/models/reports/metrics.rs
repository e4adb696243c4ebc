//! 报告派生指标
//!
//! 出勤率在提交时计算并保存；平均评分每次读取时实时计算，从不落库。

/// 出勤率（百分比，保留两位小数）
///
/// 班级容量为 0 时返回 0
pub fn attendance_percentage(actual_students: i32, total_students: i32) -> f64 {
    if total_students <= 0 {
        return 0.0;
    }
    let ratio = actual_students as f64 / total_students as f64 * 100.0;
    (ratio * 100.0).round() / 100.0
}

/// 平均评分，无评分时为 None
pub fn average_rating(ratings: &[i32]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: i64 = ratings.iter().map(|r| *r as i64).sum();
    Some(sum as f64 / ratings.len() as f64)
}
