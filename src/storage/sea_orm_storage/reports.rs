//! 报告视图查询
//!
//! 课堂报告联合讲师、班级、课程和学院，评分在读取时聚合

use super::SeaOrmStorage;
use crate::entity::lectures::{Column, Entity as Lectures};
use crate::entity::{classes, courses, faculties, lectures, ratings, timestamp_to_datetime, users};
use crate::errors::{LuctError, Result};
use crate::models::lectures::entities::LectureStatus;
use crate::models::reports::{
    entities::ReportRow,
    requests::{ReportOrder, ReportScope},
};
use crate::utils::contains_ignore_case;
use sea_orm::sea_query::{Alias, Expr, Func};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbBackend, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

#[derive(Debug, FromQueryResult)]
struct ReportQueryRow {
    id: i64,
    class_id: i64,
    lecturer_id: i64,
    week_of_reporting: String,
    date_of_lecture: String,
    actual_students: i32,
    topic_taught: String,
    learning_outcomes: String,
    recommendations: String,
    materials_used: Option<String>,
    materials_file_url: Option<String>,
    attendance_percentage: f64,
    status: String,
    created_at: i64,
    lecturer_name: String,
    class_name: String,
    total_students: i32,
    course_name: String,
    faculty_id: i64,
    faculty_name: String,
    avg_rating: Option<f64>,
    rating_count: i64,
}

impl ReportQueryRow {
    fn into_report(self) -> Result<ReportRow> {
        let status = self.status.parse::<LectureStatus>().map_err(|e| {
            LuctError::database_operation(format!("课堂报告 {} 状态无效: {e}", self.id))
        })?;

        Ok(ReportRow {
            id: self.id,
            class_id: self.class_id,
            lecturer_id: self.lecturer_id,
            week_of_reporting: self.week_of_reporting,
            date_of_lecture: self.date_of_lecture,
            actual_students: self.actual_students,
            topic_taught: self.topic_taught,
            learning_outcomes: self.learning_outcomes,
            recommendations: self.recommendations,
            materials_used: self.materials_used,
            materials_file_url: self.materials_file_url,
            attendance_percentage: self.attendance_percentage,
            status,
            created_at: timestamp_to_datetime(self.created_at),
            lecturer_name: self.lecturer_name,
            class_name: self.class_name,
            total_students: self.total_students,
            course_name: self.course_name,
            faculty_id: self.faculty_id,
            faculty_name: self.faculty_name,
            avg_rating: self.avg_rating,
            rating_count: self.rating_count,
        })
    }
}

// 保证 AVG 结果按 f64 解码（PostgreSQL 对整数求平均返回 NUMERIC）
fn float_type(backend: DbBackend) -> &'static str {
    match backend {
        DbBackend::Postgres => "DOUBLE PRECISION",
        DbBackend::MySql => "DOUBLE",
        _ => "REAL",
    }
}

impl SeaOrmStorage {
    /// 按范围列出报告
    ///
    /// 评分通过 LEFT JOIN 在同一条语句中聚合，未评分的报告 avg_rating 为 NULL
    pub async fn list_reports_impl(&self, scope: ReportScope) -> Result<Vec<ReportRow>> {
        let backend = self.db.get_database_backend();
        let avg_rating = Func::cast_as(
            Func::avg(Expr::col((ratings::Entity, ratings::Column::Rating))),
            Alias::new(float_type(backend)),
        );

        let mut select = Lectures::find()
            .select_only()
            .columns([
                Column::Id,
                Column::ClassId,
                Column::LecturerId,
                Column::WeekOfReporting,
                Column::DateOfLecture,
                Column::ActualStudents,
                Column::TopicTaught,
                Column::LearningOutcomes,
                Column::Recommendations,
                Column::MaterialsUsed,
                Column::MaterialsFileUrl,
                Column::AttendancePercentage,
                Column::Status,
                Column::CreatedAt,
            ])
            .column_as(users::Column::FullName, "lecturer_name")
            .column_as(classes::Column::Name, "class_name")
            .column_as(classes::Column::TotalStudents, "total_students")
            .column_as(courses::Column::Name, "course_name")
            .column_as(faculties::Column::Id, "faculty_id")
            .column_as(faculties::Column::Name, "faculty_name")
            .column_as(Expr::expr(avg_rating), "avg_rating")
            .column_as(
                Expr::expr(Func::count(Expr::col((ratings::Entity, ratings::Column::Id)))),
                "rating_count",
            )
            .join(JoinType::InnerJoin, lectures::Relation::Lecturer.def())
            .join(JoinType::InnerJoin, lectures::Relation::Class.def())
            .join(JoinType::InnerJoin, classes::Relation::Course.def())
            .join(JoinType::InnerJoin, courses::Relation::Faculty.def())
            .join(JoinType::LeftJoin, lectures::Relation::Ratings.def())
            // 所有非聚合列都参与分组，兼容 PostgreSQL 的严格分组规则
            .group_by(Column::Id)
            .group_by(Column::ClassId)
            .group_by(Column::LecturerId)
            .group_by(Column::WeekOfReporting)
            .group_by(Column::DateOfLecture)
            .group_by(Column::ActualStudents)
            .group_by(Column::TopicTaught)
            .group_by(Column::LearningOutcomes)
            .group_by(Column::Recommendations)
            .group_by(Column::MaterialsUsed)
            .group_by(Column::MaterialsFileUrl)
            .group_by(Column::AttendancePercentage)
            .group_by(Column::Status)
            .group_by(Column::CreatedAt)
            .group_by(users::Column::FullName)
            .group_by(classes::Column::Name)
            .group_by(classes::Column::TotalStudents)
            .group_by(courses::Column::Name)
            .group_by(faculties::Column::Id)
            .group_by(faculties::Column::Name);

        if let Some(faculty_id) = scope.faculty_id {
            select = select.filter(faculties::Column::Id.eq(faculty_id));
        }
        if let Some(lecture_id) = scope.lecture_id {
            select = select.filter(Column::Id.eq(lecture_id));
        }
        if let Some(term) = scope.search.as_deref().filter(|t| !t.trim().is_empty()) {
            select = select.filter(
                Condition::any()
                    .add(contains_ignore_case(backend, (Lectures, Column::TopicTaught), term))
                    .add(contains_ignore_case(backend, (Lectures, Column::Recommendations), term)),
            );
        }

        select = match scope.order {
            ReportOrder::Inserted => select.order_by_asc(Column::Id),
            ReportOrder::NewestLectureFirst => select
                .order_by_desc(Column::DateOfLecture)
                .order_by_desc(Column::Id),
        };

        let rows = select
            .into_model::<ReportQueryRow>()
            .all(&self.db)
            .await
            .map_err(|e| LuctError::database_operation(format!("查询报告失败: {e}")))?;

        rows.into_iter().map(ReportQueryRow::into_report).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{memory_storage, seed_class, seed_lecture, seed_user};
    use crate::models::ratings::requests::CreateRatingRequest;
    use crate::models::reports::requests::{ReportOrder, ReportScope};
    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;

    #[tokio::test]
    async fn test_report_row_joins_and_aggregates() {
        let storage = memory_storage().await;
        let (faculty, course, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
        let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
        let student = seed_user(&storage, "student1", UserRole::Student).await;
        let other = seed_user(&storage, "student2", UserRole::Student).await;
        let lecture = seed_lecture(
            &storage, &class, &lecturer, "2025-03-10", "Algebra", "None", 18,
        )
        .await;

        let rows = storage
            .list_reports(ReportScope::single(lecture.id))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].lecturer_name, lecturer.full_name);
        assert_eq!(rows[0].course_name, course.name);
        assert_eq!(rows[0].faculty_name, faculty.name);
        assert_eq!(rows[0].total_students, 40);
        assert_eq!(rows[0].attendance_percentage, 45.0);
        assert!(rows[0].avg_rating.is_none());
        assert_eq!(rows[0].rating_count, 0);

        for (user, score) in [(&student, 5), (&other, 4)] {
            storage
                .create_rating(
                    user.id,
                    CreateRatingRequest {
                        lecture_id: lecture.id,
                        rating: score,
                        comments: None,
                    },
                )
                .await
                .unwrap();
        }

        let rows = storage
            .list_reports(ReportScope::single(lecture.id))
            .await
            .unwrap();
        assert_eq!(rows[0].avg_rating, Some(4.5));
        assert_eq!(rows[0].rating_count, 2);
    }

    #[tokio::test]
    async fn test_reports_filter_by_faculty_and_search() {
        let storage = memory_storage().await;
        let (fict, _, fict_class) = seed_class(&storage, "FICT", "BIT101", 40).await;
        let (_, _, fbmg_class) = seed_class(&storage, "FBMG", "BBM201", 30).await;
        let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;

        seed_lecture(
            &storage, &fict_class, &lecturer, "2025-03-10", "Linear ALGEBRA", "None", 18,
        )
        .await;
        seed_lecture(
            &storage, &fbmg_class, &lecturer, "2025-03-11", "Marketing", "More algebra", 10,
        )
        .await;
        seed_lecture(
            &storage, &fbmg_class, &lecturer, "2025-03-12", "Accounting", "None", 10,
        )
        .await;

        let scoped = storage
            .list_reports(ReportScope {
                faculty_id: Some(fict.id),
                ..ReportScope::all(ReportOrder::Inserted)
            })
            .await
            .unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].faculty_name, "FICT");

        let searched = storage
            .list_reports(ReportScope {
                search: Some("algebra".into()),
                ..ReportScope::all(ReportOrder::Inserted)
            })
            .await
            .unwrap();
        let topics: Vec<_> = searched.iter().map(|r| r.topic_taught.as_str()).collect();
        assert_eq!(topics, ["Linear ALGEBRA", "Marketing"]);

        let wildcard = storage
            .list_reports(ReportScope {
                search: Some("%".into()),
                ..ReportScope::all(ReportOrder::Inserted)
            })
            .await
            .unwrap();
        assert!(wildcard.is_empty());
    }

    #[tokio::test]
    async fn test_report_ordering() {
        let storage = memory_storage().await;
        let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
        let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;

        seed_lecture(&storage, &class, &lecturer, "2025-03-12", "Third", "None", 1).await;
        seed_lecture(&storage, &class, &lecturer, "2025-03-01", "First", "None", 1).await;
        seed_lecture(&storage, &class, &lecturer, "2025-03-05", "Second", "None", 1).await;

        let inserted = storage
            .list_reports(ReportScope::all(ReportOrder::Inserted))
            .await
            .unwrap();
        let topics: Vec<_> = inserted.iter().map(|r| r.topic_taught.as_str()).collect();
        assert_eq!(topics, ["Third", "First", "Second"]);

        let newest = storage
            .list_reports(ReportScope::all(ReportOrder::NewestLectureFirst))
            .await
            .unwrap();
        let topics: Vec<_> = newest.iter().map(|r| r.topic_taught.as_str()).collect();
        assert_eq!(topics, ["Third", "Second", "First"]);
    }

    #[tokio::test]
    async fn test_ratings_aggregate_per_lecture_across_full_listing() {
        let storage = memory_storage().await;
        let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
        let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
        let mut students = Vec::new();
        for n in 0..3 {
            students.push(seed_user(&storage, &format!("student{n}"), UserRole::Student).await);
        }

        let mut lectures = Vec::new();
        for day in 1..=40 {
            let date = format!("2025-04-{:02}", day % 28 + 1);
            lectures.push(seed_lecture(&storage, &class, &lecturer, &date, "Topic", "None", 20).await);
        }

        // 第一个报告 3 个评分，第二个 1 个，其余无评分
        for (student, score) in students.iter().zip([5, 4, 4]) {
            storage
                .create_rating(
                    student.id,
                    CreateRatingRequest {
                        lecture_id: lectures[0].id,
                        rating: score,
                        comments: None,
                    },
                )
                .await
                .unwrap();
        }
        storage
            .create_rating(
                students[0].id,
                CreateRatingRequest {
                    lecture_id: lectures[1].id,
                    rating: 2,
                    comments: None,
                },
            )
            .await
            .unwrap();

        let rows = storage
            .list_reports(ReportScope::all(ReportOrder::Inserted))
            .await
            .unwrap();
        assert_eq!(rows.len(), 40);

        let first = &rows[0];
        assert_eq!(first.id, lectures[0].id);
        assert_eq!(first.rating_count, 3);
        let avg = first.avg_rating.unwrap();
        assert!((avg - 13.0 / 3.0).abs() < 1e-9);

        assert_eq!(rows[1].rating_count, 1);
        assert_eq!(rows[1].avg_rating, Some(2.0));

        assert!(rows[2..]
            .iter()
            .all(|r| r.rating_count == 0 && r.avg_rating.is_none()));
    }

    #[tokio::test]
    async fn test_corrupt_status_is_reported_as_error() {
        use crate::entity::lectures::{Column, Entity as Lectures};
        use crate::errors::LuctError;
        use sea_orm::sea_query::Expr;
        use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

        let storage = memory_storage().await;
        let (_, _, class) = seed_class(&storage, "FICT", "BIT101", 40).await;
        let lecturer = seed_user(&storage, "lecturer1", UserRole::Lecturer).await;
        let lecture = seed_lecture(
            &storage, &class, &lecturer, "2025-03-10", "Algebra", "None", 18,
        )
        .await;

        Lectures::update_many()
            .col_expr(Column::Status, Expr::value("Archived"))
            .filter(Column::Id.eq(lecture.id))
            .exec(&storage.db)
            .await
            .unwrap();

        let err = storage
            .list_reports(ReportScope::single(lecture.id))
            .await
            .unwrap_err();
        assert!(matches!(err, LuctError::DatabaseOperation(_)));
    }

    #[tokio::test]
    async fn test_missing_report_is_empty() {
        let storage = memory_storage().await;
        let rows = storage.list_reports(ReportScope::single(42)).await.unwrap();
        assert!(rows.is_empty());
    }
}
