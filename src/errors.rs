//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称和 HTTP 状态码映射。

use std::fmt;

use actix_web::http::StatusCode;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_luct_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum LuctError {
            $($variant(String),)*
        }

        impl LuctError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(LuctError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(LuctError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(LuctError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl LuctError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        LuctError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_luct_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    Authentication("E009", "Authentication Error"),
    Authorization("E010", "Authorization Error"),
    Export("E011", "Export Error"),
}

impl LuctError {
    /// 对应的 HTTP 状态码
    ///
    /// 401 未认证，403 无权限，400 校验失败，404 不存在，其余一律 500。
    pub fn status_code(&self) -> StatusCode {
        match self {
            LuctError::Authentication(_) => StatusCode::UNAUTHORIZED,
            LuctError::Authorization(_) => StatusCode::FORBIDDEN,
            LuctError::Validation(_) | LuctError::DateParse(_) => StatusCode::BAD_REQUEST,
            LuctError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 是否为唯一约束冲突（SQLite / PostgreSQL / MySQL 的报错文本不同）
    pub fn is_unique_violation(&self) -> bool {
        let msg = self.message().to_lowercase();
        msg.contains("unique") || msg.contains("duplicate")
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LuctError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LuctError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for LuctError {
    fn from(err: sea_orm::DbErr) -> Self {
        LuctError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for LuctError {
    fn from(err: std::io::Error) -> Self {
        LuctError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LuctError {
    fn from(err: serde_json::Error) -> Self {
        LuctError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for LuctError {
    fn from(err: chrono::ParseError) -> Self {
        LuctError::DateParse(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for LuctError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        LuctError::Export(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LuctError>;
