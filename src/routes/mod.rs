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

#[cfg(test)]
mod tests;

use actix_web::web;

pub use announcements::configure_announcements_routes;
pub use assignments::configure_assignments_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use courses::configure_courses_routes;
pub use dashboard::configure_dashboard_routes;
pub use lectures::configure_lectures_routes;
pub use notifications::configure_notifications_routes;
pub use reports::configure_reports_routes;
pub use search::configure_search_routes;

// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_dashboard_routes)
        .configure(configure_courses_routes)
        .configure(configure_classes_routes)
        .configure(configure_lectures_routes)
        .configure(configure_reports_routes)
        .configure(configure_search_routes)
        .configure(configure_announcements_routes)
        .configure(configure_assignments_routes)
        .configure(configure_notifications_routes);
}
