use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

/// 授课日期格式
pub const LECTURE_DATE_FORMAT: &str = "%Y-%m-%d";

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 5 <= len <= 16
    if username.len() < 5 || username.len() > 16 {
        return Err("Username length must be between 5 and 16 characters");
    }
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 校验密码策略，返回全部未满足的规则
///
/// 至少 8 位，且同时包含大写字母、小写字母和数字
pub fn validate_password(password: &str) -> Result<(), String> {
    let rules: [(bool, &str); 4] = [
        (
            password.chars().count() >= 8,
            "Password must be at least 8 characters long",
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "Password must contain at least one uppercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            "Password must contain at least one lowercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_digit()),
            "Password must contain at least one digit",
        ),
    ];

    let errors: Vec<&str> = rules
        .iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, msg)| *msg)
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("; "))
    }
}

/// 必填文本字段不能为空白
pub fn validate_required(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(())
}

/// 授课日期必须是合法的 YYYY-MM-DD
pub fn validate_lecture_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), LECTURE_DATE_FORMAT)
        .map_err(|_| format!("Invalid date '{value}', expected YYYY-MM-DD"))
}

pub fn validate_rating(rating: i32) -> Result<(), String> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(validate_username("lecturer_01").is_ok());
        assert!(validate_username("abc").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username("a_very_long_username_x").is_err());
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("prl@luct.ac.ls").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_password_policy_collects_all_failures() {
        assert!(validate_password("SecurePass123").is_ok());

        let err = validate_password("abc").unwrap_err();
        assert!(err.contains("at least 8 characters"));
        assert!(err.contains("uppercase"));
        assert!(err.contains("digit"));
        assert!(!err.contains("lowercase"));
    }

    #[test]
    fn test_lecture_date() {
        let date = validate_lecture_date("2025-03-14").unwrap();
        assert_eq!(date.to_string(), "2025-03-14");
        assert!(validate_lecture_date("14/03/2025").is_err());
        assert!(validate_lecture_date("2025-02-30").is_err());
    }

    #[test]
    fn test_rating_bounds() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert_eq!(
            validate_rating(6).unwrap_err(),
            "Rating must be between 1 and 5"
        );
    }

    #[test]
    fn test_required_field() {
        assert!(validate_required("topic_taught", "Algebra").is_ok());
        assert_eq!(
            validate_required("topic_taught", "   ").unwrap_err(),
            "topic_taught is required"
        );
    }
}
