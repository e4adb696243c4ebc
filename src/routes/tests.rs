//! 端到端 HTTP 测试：内存 SQLite + 完整路由表

use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{App, test, web};
use serde_json::{Value, json};
use std::sync::Arc;

use super::configure_api_routes;
use crate::models::users::entities::{User, UserRole};
use crate::storage::Storage;
use crate::storage::sea_orm_storage::SeaOrmStorage;
use crate::storage::sea_orm_storage::test_support::{
    memory_storage, seed_class, seed_lecture, seed_user,
};
use crate::utils::jwt::JwtUtils;
use crate::utils::{json_error_handler, query_error_handler};

macro_rules! init_app {
    ($storage:expr) => {
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new($storage.clone()))
                .configure(configure_api_routes),
        )
        .await
    };
}

fn bearer(user: &User) -> (actix_web::http::header::HeaderName, String) {
    let token = JwtUtils::generate_access_token(user.id, &user.role).unwrap();
    (AUTHORIZATION, format!("Bearer {token}"))
}

// 测试直接写入具体存储，应用通过 trait 对象访问同一个连接池
async fn storages() -> (SeaOrmStorage, Arc<dyn Storage>) {
    let storage = memory_storage().await;
    let shared: Arc<dyn Storage> = Arc::new(storage.clone());
    (storage, shared)
}

#[actix_web::test]
async fn test_protected_endpoint_requires_token() {
    let (_storage, shared) = storages().await;
    let app = init_app!(shared);

    let req = test::TestRequest::get().uri("/api/dashboard").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["msg"].is_string());
    assert!(body.get("data").is_none());
}

#[actix_web::test]
async fn test_student_cannot_create_course() {
    let (storage, shared) = storages().await;
    let app = init_app!(shared);

    let faculty = storage.create_faculty("FICT").await.unwrap();
    let student = seed_user(&storage, "student1", UserRole::Student).await;

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(bearer(&student))
        .set_json(json!({ "name": "Databases", "code": "DB101", "faculty_id": faculty.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    assert!(storage.list_courses().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_register_duplicate_username() {
    let (storage, shared) = storages().await;
    let app = init_app!(shared);

    let payload = json!({
        "username": "thabo_s",
        "password": "Secret123",
        "role": "Student",
        "full_name": "Thabo S",
        "email": "thabo@luct.ac.ls",
        "student_id": "901000001"
    });

    let req = test::TestRequest::post()
        .uri("/api/register")
        .insert_header(("X-Forwarded-For", "10.20.0.1"))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/register")
        .insert_header(("X-Forwarded-For", "10.20.0.1"))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "Username already exists");

    assert_eq!(
        storage.count_users_by_role(UserRole::Student).await.unwrap(),
        1
    );
}

#[actix_web::test]
async fn test_register_then_login_and_read_profile() {
    let (_storage, shared) = storages().await;
    let app = init_app!(shared);

    let req = test::TestRequest::post()
        .uri("/api/register")
        .insert_header(("X-Forwarded-For", "10.20.0.2"))
        .set_json(json!({
            "username": "lerato_m",
            "password": "Lecture99",
            "role": "Lecturer",
            "full_name": "Lerato M",
            "email": "lerato@luct.ac.ls"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .insert_header(("X-Forwarded-For", "10.20.0.2"))
        .set_json(json!({ "username": "lerato_m", "password": "wrong-pass" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .insert_header(("X-Forwarded-For", "10.20.0.2"))
        .set_json(json!({ "username": "lerato_m", "password": "Lecture99" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let token = body["data"]["access_token"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["user"]["role"], "Lecturer");

    let req = test::TestRequest::get()
        .uri("/api/profile")
        .insert_header((AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["user"]["username"], "lerato_m");
    assert!(body["data"]["user"].get("password_hash").is_none());
}

#[actix_web::test]
async fn test_submit_lecture_computes_attendance() {
    let (storage, shared) = storages().await;
    let app = init_app!(shared);

    let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
    let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;

    let req = test::TestRequest::post()
        .uri("/api/lectures")
        .insert_header(bearer(&lecturer))
        .set_json(json!({
            "class_id": class.id,
            "week_of_reporting": "Week 3",
            "date_of_lecture": "2025-03-10",
            "actual_students": 18,
            "topic_taught": "Linear Algebra",
            "learning_outcomes": "Matrices",
            "recommendations": "More practice"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["attendance_percentage"].as_f64(), Some(45.0));
    assert_eq!(body["data"]["status"], "Pending");

    // 学生不能提交报告
    let student = seed_user(&storage, "student1", UserRole::Student).await;
    let req = test::TestRequest::post()
        .uri("/api/lectures")
        .insert_header(bearer(&student))
        .set_json(json!({
            "class_id": class.id,
            "week_of_reporting": "Week 3",
            "date_of_lecture": "2025-03-10",
            "actual_students": 18,
            "topic_taught": "Linear Algebra",
            "learning_outcomes": "Matrices",
            "recommendations": "More practice"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_search_lectures_case_insensitive() {
    let (storage, shared) = storages().await;
    let app = init_app!(shared);

    let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
    let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
    let student = seed_user(&storage, "student1", UserRole::Student).await;
    seed_lecture(
        &storage,
        &class,
        &lecturer,
        "2025-03-10",
        "Linear Algebra",
        "None",
        20,
    )
    .await;
    seed_lecture(
        &storage,
        &class,
        &lecturer,
        "2025-03-17",
        "Calculus",
        "None",
        20,
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/search/lectures?q=algebra")
        .insert_header(bearer(&student))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["topic_taught"], "Linear Algebra");

    let req = test::TestRequest::get()
        .uri("/api/search/grades?q=algebra")
        .insert_header(bearer(&student))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_report_views_and_review_flow() {
    let (storage, shared) = storages().await;
    let app = init_app!(shared);

    let (faculty, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
    let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
    let prl = seed_user(&storage, "prl_user", UserRole::Prl).await;
    let student = seed_user(&storage, "student1", UserRole::Student).await;
    let lecture = seed_lecture(
        &storage,
        &class,
        &lecturer,
        "2025-03-10",
        "Networks",
        "Lab time",
        30,
    )
    .await;

    // 讲师不能查看 PRL 视图
    let req = test::TestRequest::get()
        .uri("/api/reports/PRL")
        .insert_header(bearer(&lecturer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get()
        .uri(&format!("/api/reports/PRL?faculty_id={}", faculty.id))
        .insert_header(bearer(&prl))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["faculty_name"], "FICT");

    // 学生不能审核
    let req = test::TestRequest::put()
        .uri(&format!("/api/reports/{}/status", lecture.id))
        .insert_header(bearer(&student))
        .set_json(json!({ "status": "Approved" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::put()
        .uri(&format!("/api/reports/{}/status", lecture.id))
        .insert_header(bearer(&prl))
        .set_json(json!({ "status": "Approved", "feedback": "Well structured" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/reports/{}/feedback", lecture.id))
        .insert_header(bearer(&lecturer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["items"][0]["feedback_text"], "Well structured");

    // 讲师收到通知，其他人不能标记已读
    let req = test::TestRequest::get()
        .uri("/api/notifications")
        .insert_header(bearer(&lecturer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total"], 1);
    let notification_id = body["data"]["items"][0]["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/notifications/{notification_id}/read"))
        .insert_header(bearer(&student))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri(&format!("/api/notifications/{notification_id}/read"))
        .insert_header(bearer(&lecturer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_rating_bounds_and_monitoring() {
    let (storage, shared) = storages().await;
    let app = init_app!(shared);

    let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
    let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
    let student = seed_user(&storage, "student1", UserRole::Student).await;
    let lecture = seed_lecture(
        &storage,
        &class,
        &lecturer,
        "2025-03-10",
        "Networks",
        "Lab time",
        30,
    )
    .await;

    for (rating, expected) in [
        (6, StatusCode::BAD_REQUEST),
        (4, StatusCode::CREATED),
        (5, StatusCode::CREATED),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/rating")
            .insert_header(bearer(&student))
            .set_json(json!({ "lecture_id": lecture.id, "rating": rating }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/monitoring/{}", lecture.id))
        .insert_header(bearer(&lecturer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["avg_rating"].as_f64(), Some(4.5));
}

#[actix_web::test]
async fn test_export_permissions_and_missing_reports() {
    let (storage, shared) = storages().await;
    let app = init_app!(shared);

    let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
    let student = seed_user(&storage, "student1", UserRole::Student).await;
    let pl = seed_user(&storage, "pl_user", UserRole::Pl).await;

    for user in [&student, &lecturer] {
        let req = test::TestRequest::get()
            .uri("/api/export/all-reports")
            .insert_header(bearer(user))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    // 还没有任何报告
    let req = test::TestRequest::get()
        .uri("/api/export/all-reports")
        .insert_header(bearer(&pl))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/export/reports/999")
        .insert_header(bearer(&student))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "Report not found");
}

#[actix_web::test]
async fn test_export_downloads_xlsx() {
    let (storage, shared) = storages().await;
    let app = init_app!(shared);

    let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
    let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
    let prl = seed_user(&storage, "prl_user", UserRole::Prl).await;
    let lecture = seed_lecture(
        &storage,
        &class,
        &lecturer,
        "2025-03-10",
        "Networks",
        "Lab time",
        30,
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/export/reports/{}", lecture.id))
        .insert_header(bearer(&lecturer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        format!("attachment; filename=\"luct-report-{}.xlsx\"", lecture.id).as_str()
    );
    let bytes = test::read_body(resp).await;
    assert_eq!(&bytes[..2], b"PK");

    let req = test::TestRequest::get()
        .uri("/api/export/all-reports")
        .insert_header(bearer(&prl))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"luct-all-reports-"));
    assert!(disposition.ends_with(".xlsx\""));
}

#[actix_web::test]
async fn test_assign_lecturer_validation() {
    let (storage, shared) = storages().await;
    let app = init_app!(shared);

    let (_, course, _) = seed_class(&storage, "FICT", "BIT101", 40).await;
    let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
    let student = seed_user(&storage, "student1", UserRole::Student).await;
    let pl = seed_user(&storage, "pl_user", UserRole::Pl).await;

    let req = test::TestRequest::post()
        .uri("/api/assign-lecturer")
        .insert_header(bearer(&pl))
        .set_json(json!({ "course_id": course.id, "lecturer_id": student.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/assign-lecturer")
        .insert_header(bearer(&pl))
        .set_json(json!({ "course_id": course.id + 100, "lecturer_id": lecturer.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let stored = storage.get_course_by_id(course.id).await.unwrap().unwrap();
    assert_eq!(stored.lecturer_id, None);

    let req = test::TestRequest::post()
        .uri("/api/assign-lecturer")
        .insert_header(bearer(&pl))
        .set_json(json!({ "course_id": course.id, "lecturer_id": lecturer.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = storage.get_course_by_id(course.id).await.unwrap().unwrap();
    assert_eq!(stored.lecturer_id, Some(lecturer.id));
}

#[actix_web::test]
async fn test_create_class_unknown_course() {
    let (storage, shared) = storages().await;
    let app = init_app!(shared);

    let pl = seed_user(&storage, "pl_user", UserRole::Pl).await;

    let req = test::TestRequest::post()
        .uri("/api/classes")
        .insert_header(bearer(&pl))
        .set_json(json!({
            "name": "BIT101-B",
            "course_id": 404,
            "total_students": 35,
            "venue": "Hall 2",
            "scheduled_time": "Tue 10:30"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    assert!(storage.list_classes().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_change_password_requires_current_password() {
    use crate::models::users::requests::NewUser;
    use crate::utils::password::{hash_password, verify_password};

    let (storage, shared) = storages().await;
    let app = init_app!(shared);

    let user = storage
        .create_user(NewUser {
            username: "palesa_k".to_string(),
            password_hash: hash_password("Secret123").unwrap(),
            role: UserRole::Student,
            full_name: "Palesa K".to_string(),
            email: "palesa@luct.ac.ls".to_string(),
            student_id: None,
        })
        .await
        .unwrap();

    let req = test::TestRequest::put()
        .uri("/api/change-password")
        .insert_header(bearer(&user))
        .set_json(json!({ "current_password": "Wrong1234", "new_password": "Another123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "Current password is incorrect");

    let stored = storage.get_user_by_id(user.id).await.unwrap().unwrap();
    assert!(verify_password("Secret123", &stored.password_hash));

    let req = test::TestRequest::put()
        .uri("/api/change-password")
        .insert_header(bearer(&user))
        .set_json(json!({ "current_password": "Secret123", "new_password": "Another123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = storage.get_user_by_id(user.id).await.unwrap().unwrap();
    assert!(verify_password("Another123", &stored.password_hash));
}
