use super::entities::UserRole;

// 写入存储层的新用户（密码已哈希）
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
    pub full_name: String,
    pub email: String,
    pub student_id: Option<String>,
}
