use super::entities::LectureStatus;
use serde::Deserialize;

// 提交课堂报告请求
//
// 出勤率由服务端根据班级容量计算，客户端不提交 total_students
#[derive(Debug, Deserialize)]
pub struct CreateLectureRequest {
    pub class_id: i64,
    pub week_of_reporting: String,
    pub date_of_lecture: String,
    pub actual_students: i32,
    pub topic_taught: String,
    pub learning_outcomes: String,
    pub recommendations: String,
    pub materials_used: Option<String>,
    pub materials_file_url: Option<String>,
}

// 更新报告状态请求
#[derive(Debug, Deserialize)]
pub struct UpdateLectureStatusRequest {
    pub status: LectureStatus,
    pub feedback: Option<String>,
}

// 写入存储层的报告数据（已完成校验与出勤率计算）
#[derive(Debug, Clone)]
pub struct NewLecture {
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
}
