pub mod announcements;
pub mod assignments;
pub mod auth;
pub mod classes;
pub mod courses;
pub mod dashboard;
pub mod lectures;
pub mod notifications;
pub mod reports;
pub mod search;

pub use announcements::AnnouncementService;
pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use courses::CourseService;
pub use dashboard::DashboardService;
pub use lectures::LectureService;
pub use notifications::NotificationService;
pub use reports::ReportService;
pub use search::SearchService;
