use serde::{Deserialize, Serialize};

// 报告审核状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LectureStatus {
    Pending,  // 待审核
    Reviewed, // 已审阅
    Approved, // 已批准
}

impl LectureStatus {
    pub const PENDING: &'static str = "Pending";
    pub const REVIEWED: &'static str = "Reviewed";
    pub const APPROVED: &'static str = "Approved";
}

impl std::fmt::Display for LectureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LectureStatus::Pending => write!(f, "{}", LectureStatus::PENDING),
            LectureStatus::Reviewed => write!(f, "{}", LectureStatus::REVIEWED),
            LectureStatus::Approved => write!(f, "{}", LectureStatus::APPROVED),
        }
    }
}

impl std::str::FromStr for LectureStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            LectureStatus::PENDING => Ok(LectureStatus::Pending),
            LectureStatus::REVIEWED => Ok(LectureStatus::Reviewed),
            LectureStatus::APPROVED => Ok(LectureStatus::Approved),
            _ => Err(format!("Invalid lecture status: {s}")),
        }
    }
}

// 课堂报告实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecture {
    pub id: i64,
    pub class_id: i64,
    pub lecturer_id: i64,
    pub week_of_reporting: String,
    /// YYYY-MM-DD
    pub date_of_lecture: String,
    pub actual_students: i32,
    pub topic_taught: String,
    pub learning_outcomes: String,
    pub recommendations: String,
    pub materials_used: Option<String>,
    pub materials_file_url: Option<String>,
    /// 提交时按班级容量计算并保存
    pub attendance_percentage: f64,
    pub status: LectureStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
