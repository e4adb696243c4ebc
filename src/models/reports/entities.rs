use serde::Serialize;

use crate::models::lectures::entities::LectureStatus;

// 报告视图行
//
// 课堂报告 + 讲师 + 班级 + 课程 + 学院的联合结果，附带评分聚合
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub id: i64,
    pub class_id: i64,
    pub lecturer_id: i64,
    pub week_of_reporting: String,
    pub date_of_lecture: String,
    pub actual_students: i32,
    pub topic_taught: String,
    pub learning_outcomes: String,
    pub recommendations: String,
    pub materials_used: Option<String>,
    pub materials_file_url: Option<String>,
    pub attendance_percentage: f64,
    pub status: LectureStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub lecturer_name: String,
    pub class_name: String,
    pub total_students: i32,
    pub course_name: String,
    pub faculty_id: i64,
    pub faculty_name: String,
    /// 无评分时为 null
    pub avg_rating: Option<f64>,
    pub rating_count: i64,
}
