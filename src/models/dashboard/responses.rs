use serde::Serialize;

// 仪表盘统计，按角色返回不同计数
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "role")]
pub enum DashboardStats {
    Student {
        /// 当前学生尚未评分的课堂数
        unrated_lectures: u64,
        latest_report_at: Option<chrono::DateTime<chrono::Utc>>,
    },
    Lecturer {
        pending_reports: u64,
        classes_reported: u64,
    },
    #[serde(rename = "PRL")]
    Prl {
        feedback_given: u64,
        pending_reviews: u64,
    },
    #[serde(rename = "PL")]
    Pl {
        total_lectures: u64,
        active_lecturers: u64,
    },
}
