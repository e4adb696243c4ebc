//! 数据模型定义
//!
//! 每个业务域按 entities / requests / responses 拆分。

pub mod announcements;
pub mod assignments;
pub mod auth;
pub mod classes;
pub mod common;
pub mod courses;
pub mod dashboard;
pub mod feedbacks;
pub mod lectures;
pub mod notifications;
pub mod ratings;
pub mod reports;
pub mod search;
pub mod submissions;
pub mod users;

pub use common::{ApiResponse, ErrorCode, ListResponse};
