/// 业务错误码
///
/// 0 为成功；1xxx 通用错误；2xxx 账户；3xxx 课程与班级；4xxx 课堂报告；5xxx 其他模块。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    InternalServerError = 1005,
    RateLimitExceeded = 1029,

    AuthFailed = 2000,
    RegisterFailed = 2001,
    UserNameAlreadyExists = 2002,
    UserNameInvalid = 2003,
    UserEmailInvalid = 2004,
    UserPasswordInvalid = 2005,
    UserNotFound = 2006,
    UserUpdateFailed = 2007,
    UserInactive = 2008,

    FacultyNotFound = 3000,
    CourseNotFound = 3001,
    CourseCreationFailed = 3002,
    CourseCodeAlreadyExists = 3003,
    LecturerInvalid = 3004,
    ClassNotFound = 3005,
    ClassCreationFailed = 3006,

    LectureNotFound = 4000,
    LectureCreationFailed = 4001,
    LectureInvalid = 4002,
    ReportRoleInvalid = 4003,
    ReportFacultyRequired = 4004,
    FeedbackInvalid = 4005,
    RatingInvalid = 4006,
    ExportFailed = 4007,

    SearchModuleInvalid = 5000,
    AnnouncementInvalid = 5001,
    AssignmentNotFound = 5002,
    AssignmentInvalid = 5003,
    SubmissionInvalid = 5004,
    NotificationNotFound = 5005,
}
