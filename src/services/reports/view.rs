//! 报告角色视图
//!
//! 每个角色对应一种查询形状：排序方式和学院范围。表和连接对所有角色相同。

use crate::errors::{LuctError, Result};
use crate::models::reports::requests::{ReportOrder, ReportQueryParams, ReportScope};
use crate::models::users::entities::UserRole;

pub trait ReportView: Send + Sync {
    fn role(&self) -> UserRole;

    /// 由查询参数构造存储层查询范围
    ///
    /// `default_faculty` 来自配置，仅在视图需要学院范围时使用
    fn scope(&self, params: &ReportQueryParams, default_faculty: Option<i64>)
    -> Result<ReportScope>;
}

fn search_term(params: &ReportQueryParams) -> Option<String> {
    params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
}

pub struct StudentView;

impl ReportView for StudentView {
    fn role(&self) -> UserRole {
        UserRole::Student
    }

    fn scope(&self, params: &ReportQueryParams, _: Option<i64>) -> Result<ReportScope> {
        Ok(ReportScope {
            search: search_term(params),
            ..ReportScope::all(ReportOrder::NewestLectureFirst)
        })
    }
}

pub struct LecturerView;

impl ReportView for LecturerView {
    fn role(&self) -> UserRole {
        UserRole::Lecturer
    }

    fn scope(&self, params: &ReportQueryParams, _: Option<i64>) -> Result<ReportScope> {
        Ok(ReportScope {
            search: search_term(params),
            ..ReportScope::all(ReportOrder::Inserted)
        })
    }
}

/// PRL 只看一个学院
pub struct PrlView;

impl ReportView for PrlView {
    fn role(&self) -> UserRole {
        UserRole::Prl
    }

    fn scope(
        &self,
        params: &ReportQueryParams,
        default_faculty: Option<i64>,
    ) -> Result<ReportScope> {
        let faculty_id = params
            .faculty_id
            .or(default_faculty)
            .ok_or_else(|| LuctError::validation("faculty_id is required for PRL reports"))?;

        Ok(ReportScope {
            faculty_id: Some(faculty_id),
            search: search_term(params),
            ..ReportScope::all(ReportOrder::Inserted)
        })
    }
}

pub struct PlView;

impl ReportView for PlView {
    fn role(&self) -> UserRole {
        UserRole::Pl
    }

    fn scope(&self, params: &ReportQueryParams, _: Option<i64>) -> Result<ReportScope> {
        Ok(ReportScope {
            faculty_id: params.faculty_id,
            search: search_term(params),
            ..ReportScope::all(ReportOrder::NewestLectureFirst)
        })
    }
}

static STUDENT_VIEW: StudentView = StudentView;
static LECTURER_VIEW: LecturerView = LecturerView;
static PRL_VIEW: PrlView = PrlView;
static PL_VIEW: PlView = PlView;

pub fn view_for_role(role: UserRole) -> &'static dyn ReportView {
    match role {
        UserRole::Student => &STUDENT_VIEW,
        UserRole::Lecturer => &LECTURER_VIEW,
        UserRole::Prl => &PRL_VIEW,
        UserRole::Pl => &PL_VIEW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(faculty_id: Option<i64>, q: Option<&str>) -> ReportQueryParams {
        ReportQueryParams {
            faculty_id,
            q: q.map(str::to_string),
        }
    }

    #[test]
    fn test_view_for_role_matches() {
        for role in UserRole::all_roles() {
            assert_eq!(view_for_role(**role).role(), **role);
        }
    }

    #[test]
    fn test_student_and_pl_order_newest_first() {
        let student = view_for_role(UserRole::Student)
            .scope(&params(Some(3), None), None)
            .unwrap();
        assert_eq!(student.order, ReportOrder::NewestLectureFirst);
        // 学生视图不按学院过滤
        assert_eq!(student.faculty_id, None);

        let pl = view_for_role(UserRole::Pl)
            .scope(&params(Some(3), None), None)
            .unwrap();
        assert_eq!(pl.order, ReportOrder::NewestLectureFirst);
        assert_eq!(pl.faculty_id, Some(3));
    }

    #[test]
    fn test_lecturer_uses_insertion_order() {
        let scope = view_for_role(UserRole::Lecturer)
            .scope(&params(None, Some("  algebra ")), Some(9))
            .unwrap();
        assert_eq!(scope.order, ReportOrder::Inserted);
        assert_eq!(scope.faculty_id, None);
        assert_eq!(scope.search.as_deref(), Some("algebra"));
    }

    #[test]
    fn test_prl_faculty_resolution() {
        let prl = view_for_role(UserRole::Prl);

        let explicit = prl.scope(&params(Some(2), None), Some(7)).unwrap();
        assert_eq!(explicit.faculty_id, Some(2));

        let fallback = prl.scope(&params(None, None), Some(7)).unwrap();
        assert_eq!(fallback.faculty_id, Some(7));
        assert_eq!(fallback.order, ReportOrder::Inserted);

        let err = prl.scope(&params(None, None), None).unwrap_err();
        assert!(matches!(err, LuctError::Validation(_)));
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let scope = view_for_role(UserRole::Student)
            .scope(&params(None, Some("   ")), None)
            .unwrap();
        assert!(scope.search.is_none());
    }
}
