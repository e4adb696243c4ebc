use crate::config::AppConfig;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::NewUser;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 生成随机密码
///
/// 保证同时含有大小写字母和数字，满足密码策略
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();
    let body: String = (0..length.saturating_sub(3))
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();
    format!(
        "{}{}{}{body}",
        rng.random_range(b'A'..=b'Z') as char,
        rng.random_range(b'a'..=b'z') as char,
        rng.random_range(b'0'..=b'9') as char,
    )
}

/// 初始化默认学院
/// 学院表为空时写入配置中的学院列表
async fn seed_faculties(storage: &Arc<dyn Storage>) {
    match storage.count_faculties().await {
        Ok(count) if count > 0 => {
            debug!("Database already has {} faculties, skipping seed", count);
            return;
        }
        Ok(_) => {}
        Err(e) => {
            warn!("Failed to count faculties: {}, skipping faculty seed", e);
            return;
        }
    }

    for name in &AppConfig::get().app.default_faculties {
        match storage.create_faculty(name).await {
            Ok(faculty) => info!("Faculty seeded (ID: {}, name: {})", faculty.id, faculty.name),
            Err(e) => warn!("Failed to seed faculty {}: {}", name, e),
        }
    }
}

/// 初始管理员密码的来源
#[derive(Debug, PartialEq, Eq)]
enum AdminPassword {
    FromEnv(String),
    Generated(String),
}

impl AdminPassword {
    // ADMIN_PASSWORD 未设置或为空时生成随机密码
    fn resolve(env_value: Option<String>) -> Self {
        match env_value.filter(|v| !v.trim().is_empty()) {
            Some(pwd) => AdminPassword::FromEnv(pwd),
            None => AdminPassword::Generated(generate_random_password(16)),
        }
    }

    fn as_str(&self) -> &str {
        match self {
            AdminPassword::FromEnv(pwd) | AdminPassword::Generated(pwd) => pwd,
        }
    }
}

/// 初始化默认 PL 账号
/// 如果数据库中没有任何 PL，则创建一个 admin 账号用于管理课程和班级
async fn seed_admin(storage: &Arc<dyn Storage>, password: &AdminPassword) {
    match storage.count_users_by_role(UserRole::Pl).await {
        Ok(count) if count > 0 => {
            debug!("Database already has {} PL account(s), skipping admin seed", count);
            return;
        }
        Ok(_) => {
            info!("No PL account found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count PL accounts: {}, skipping admin seed", e);
            return;
        }
    }

    let password_hash = match hash_password(password.as_str()) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let admin = NewUser {
        username: "admin".to_string(),
        password_hash,
        role: UserRole::Pl,
        full_name: "Program Leader".to_string(),
        email: "admin@localhost.local".to_string(),
        student_id: None,
    };

    match storage.create_user(admin).await {
        Ok(user) => {
            info!(
                "Default PL account created (ID: {}, username: {})",
                user.id, user.username
            );
            // 生成的密码只打印到 stderr 一次，不进入日志管道
            if let AdminPassword::Generated(pwd) = password {
                warn!("ADMIN_PASSWORD not set, a generated password was printed to stderr");
                eprintln!("Generated password for '{}': {pwd}", user.username);
            }
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    seed_faculties(&storage).await;
    let admin_password = AdminPassword::resolve(std::env::var("ADMIN_PASSWORD").ok());
    seed_admin(&storage, &admin_password).await;

    StartupContext { storage }
}
