use sea_orm::DbBackend;
use sea_orm::sea_query::{Expr, ExprTrait, Func, IntoColumnRef, LikeExpr};

/// LIKE 转义字符
pub const LIKE_ESCAPE: char = '\\';

/// 转义 LIKE 模式中的通配符，使用户输入按字面匹配
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// 按数据库 LOWER() 的规则折叠搜索词
///
/// SQLite 内置的 LOWER() 只转换 ASCII 字母，搜索词若按 Unicode 折叠，
/// `ÉCOLE` 会变成 `école` 而列值只会变成 `École`，两者永远不相等。
pub fn fold_case(backend: DbBackend, term: &str) -> String {
    match backend {
        DbBackend::Sqlite => term.to_ascii_lowercase(),
        _ => term.to_lowercase(),
    }
}

/// 构造大小写不敏感的子串匹配：LOWER(col) LIKE '%term%' ESCAPE '\'
///
/// 调用方传入未转义的原始搜索词。SQLite 上只有 ASCII 字母忽略大小写。
pub fn contains_ignore_case<C: IntoColumnRef>(backend: DbBackend, col: C, term: &str) -> Expr {
    let pattern = format!("%{}%", escape_like_pattern(&fold_case(backend, term.trim())));
    Expr::expr(Func::lower(Expr::col(col))).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_wildcards() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("week_1"), "week\\_1");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
        assert_eq!(escape_like_pattern("algebra"), "algebra");
    }

    #[test]
    fn test_fold_case_follows_backend_lower() {
        assert_eq!(fold_case(DbBackend::Sqlite, "ALGEBRA"), "algebra");
        assert_eq!(fold_case(DbBackend::Sqlite, "ÉCOLE"), "École");
        assert_eq!(fold_case(DbBackend::Postgres, "ÉCOLE"), "école");
        assert_eq!(fold_case(DbBackend::MySql, "Week_1"), "week_1");
    }
}
