use serde::Deserialize;

// 报告列表查询参数（来自HTTP请求）
#[derive(Debug, Default, Deserialize)]
pub struct ReportQueryParams {
    pub faculty_id: Option<i64>,
    /// 按 topic_taught / recommendations 过滤
    pub q: Option<String>,
}

// 报告排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOrder {
    /// 按插入顺序
    Inserted,
    /// 按授课日期倒序
    NewestLectureFirst,
}

// 报告查询范围（用于存储层）
#[derive(Debug, Clone, PartialEq)]
pub struct ReportScope {
    pub faculty_id: Option<i64>,
    pub lecture_id: Option<i64>,
    pub search: Option<String>,
    pub order: ReportOrder,
}

impl ReportScope {
    pub fn all(order: ReportOrder) -> Self {
        Self {
            faculty_id: None,
            lecture_id: None,
            search: None,
            order,
        }
    }

    pub fn single(lecture_id: i64) -> Self {
        Self {
            lecture_id: Some(lecture_id),
            ..Self::all(ReportOrder::Inserted)
        }
    }
}
