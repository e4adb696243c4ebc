use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ReportService;
use super::sheet::{Cell, ExportColumn, ExportSheet, XLSX_CONTENT_TYPE};
use crate::models::reports::{
    entities::ReportRow,
    requests::{ReportOrder, ReportScope},
};
use crate::models::{ApiResponse, ErrorCode};

const ALL_REPORT_COLUMNS: [ExportColumn; 13] = [
    ExportColumn::new("ID", 8.0),
    ExportColumn::new("Faculty", 15.0),
    ExportColumn::new("Course", 20.0),
    ExportColumn::new("Class", 15.0),
    ExportColumn::new("Lecturer", 15.0),
    ExportColumn::new("Total Students", 12.0),
    ExportColumn::new("Actual Present", 12.0),
    ExportColumn::new("Week", 8.0),
    ExportColumn::new("Date", 12.0),
    ExportColumn::new("Topic", 25.0),
    ExportColumn::new("Outcomes", 30.0),
    ExportColumn::new("Recommendations", 25.0),
    ExportColumn::new("Avg Rating", 10.0),
];

/// 单个报告：字段 / 值 两列
pub fn single_report_sheet(row: &ReportRow, export_title: &str) -> ExportSheet {
    let fields: Vec<(&str, Cell)> = vec![
        ("ID", Cell::Number(row.id as f64)),
        ("Faculty", Cell::text(&row.faculty_name)),
        ("Course", Cell::text(&row.course_name)),
        ("Class", Cell::text(&row.class_name)),
        ("Lecturer", Cell::text(&row.lecturer_name)),
        ("Total Students", Cell::Number(row.total_students as f64)),
        ("Actual Present", Cell::Number(row.actual_students as f64)),
        ("Attendance %", Cell::Number(row.attendance_percentage)),
        ("Week Reporting", Cell::text(&row.week_of_reporting)),
        ("Date", Cell::text(&row.date_of_lecture)),
        ("Topic Taught", Cell::text(&row.topic_taught)),
        ("Learning Outcomes", Cell::text(&row.learning_outcomes)),
        ("Recommendations", Cell::text(&row.recommendations)),
        ("Materials Used", Cell::optional_text(row.materials_used.as_deref())),
        ("Materials File", Cell::optional_text(row.materials_file_url.as_deref())),
        ("Status", Cell::text(row.status.to_string())),
        ("Avg Rating", Cell::optional_number(row.avg_rating.map(round2))),
        ("Created At", Cell::text(row.created_at.to_rfc3339())),
    ];

    ExportSheet {
        sheet_name: "Lecture Report".into(),
        title: format!("Lecture Report - {export_title}"),
        columns: vec![ExportColumn::new("Field", 20.0), ExportColumn::new("Value", 40.0)],
        rows: fields
            .into_iter()
            .map(|(field, value)| vec![Cell::text(field), value])
            .collect(),
    }
}

/// 全部报告：每个课堂一行
pub fn all_reports_sheet(rows: &[ReportRow], export_title: &str) -> ExportSheet {
    ExportSheet {
        sheet_name: "All Reports".into(),
        title: format!("All Faculty Reports - {export_title}"),
        columns: ALL_REPORT_COLUMNS.to_vec(),
        rows: rows
            .iter()
            .map(|row| {
                vec![
                    Cell::Number(row.id as f64),
                    Cell::text(&row.faculty_name),
                    Cell::text(&row.course_name),
                    Cell::text(&row.class_name),
                    Cell::text(&row.lecturer_name),
                    Cell::Number(row.total_students as f64),
                    Cell::Number(row.actual_students as f64),
                    Cell::text(&row.week_of_reporting),
                    Cell::text(&row.date_of_lecture),
                    Cell::text(&row.topic_taught),
                    Cell::text(&row.learning_outcomes),
                    Cell::text(&row.recommendations),
                    Cell::optional_number(row.avg_rating.map(round2)),
                ]
            })
            .collect(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn xlsx_response(sheet: &ExportSheet, filename: &str) -> HttpResponse {
    match sheet.render() {
        Ok(buffer) => HttpResponse::Ok()
            .content_type(XLSX_CONTENT_TYPE)
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{filename}\""),
            ))
            .body(buffer),
        Err(e) => {
            error!("XLSX 生成失败: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                format!("Export failed: {e}"),
            ))
        }
    }
}

pub async fn export_report(
    service: &ReportService,
    request: &HttpRequest,
    lecture_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let row = match storage.list_reports(ReportScope::single(lecture_id)).await {
        Ok(rows) => match rows.into_iter().next() {
            Some(row) => row,
            None => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::LectureNotFound,
                    "Report not found",
                )));
            }
        },
        Err(e) => {
            error!("导出报告 {} 失败: {}", lecture_id, e);
            return Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e));
        }
    };

    let sheet = single_report_sheet(&row, &service.get_config().reports.export_title);
    info!("Exporting lecture report {}", lecture_id);
    Ok(xlsx_response(&sheet, &format!("luct-report-{lecture_id}.xlsx")))
}

pub async fn export_all_reports(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let rows = match storage
        .list_reports(ReportScope::all(ReportOrder::NewestLectureFirst))
        .await
    {
        Ok(rows) if rows.is_empty() => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "No reports found",
            )));
        }
        Ok(rows) => rows,
        Err(e) => {
            error!("导出全部报告失败: {}", e);
            return Ok(ApiResponse::from_error(ErrorCode::InternalServerError, &e));
        }
    };

    let sheet = all_reports_sheet(&rows, &service.get_config().reports.export_title);
    let filename = format!(
        "luct-all-reports-{}.xlsx",
        chrono::Utc::now().format("%Y-%m-%d")
    );
    info!("Exporting {} lecture reports", rows.len());
    Ok(xlsx_response(&sheet, &filename))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lectures::entities::LectureStatus;

    fn report_row() -> ReportRow {
        ReportRow {
            id: 7,
            class_id: 1,
            lecturer_id: 2,
            week_of_reporting: "Week 3".into(),
            date_of_lecture: "2025-03-10".into(),
            actual_students: 18,
            topic_taught: "Algebra".into(),
            learning_outcomes: "Equations".into(),
            recommendations: "Practice".into(),
            materials_used: Some("Slides".into()),
            materials_file_url: None,
            attendance_percentage: 45.0,
            status: LectureStatus::Pending,
            created_at: chrono::Utc::now(),
            lecturer_name: "Thabo Mokoena".into(),
            class_name: "BIT101-A".into(),
            total_students: 40,
            course_name: "Programming".into(),
            faculty_id: 1,
            faculty_name: "FICT".into(),
            avg_rating: None,
            rating_count: 0,
        }
    }

    fn value_of(sheet: &ExportSheet, field: &str) -> String {
        sheet
            .rows
            .iter()
            .find(|cells| cells[0] == Cell::text(field))
            .map(|cells| cells[1].display())
            .unwrap_or_default()
    }

    #[test]
    fn test_single_report_missing_materials_file_is_na() {
        let sheet = single_report_sheet(&report_row(), "LUCT Faculty System");
        assert_eq!(sheet.title, "Lecture Report - LUCT Faculty System");
        assert_eq!(value_of(&sheet, "Materials File"), "N/A");
        assert_eq!(value_of(&sheet, "Materials Used"), "Slides");
        assert_eq!(value_of(&sheet, "Attendance %"), "45");
        assert_eq!(value_of(&sheet, "Avg Rating"), "N/A");
    }

    #[test]
    fn test_all_reports_layout() {
        let mut rated = report_row();
        rated.avg_rating = Some(13.0 / 3.0);
        let sheet = all_reports_sheet(&[rated, report_row()], "LUCT");

        assert_eq!(sheet.columns.len(), 13);
        assert!(sheet.rows.iter().all(|r| r.len() == sheet.columns.len()));
        assert_eq!(sheet.rows[0][12], Cell::Number(4.33));
        assert_eq!(sheet.rows[1][12].display(), "N/A");
        let widths: Vec<f64> = sheet.columns.iter().map(|c| c.width).collect();
        assert_eq!(
            widths,
            [8.0, 15.0, 20.0, 15.0, 15.0, 12.0, 12.0, 8.0, 12.0, 25.0, 30.0, 25.0, 10.0]
        );
    }
}
