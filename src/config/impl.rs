use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 部署时常用的裸环境变量 -> 配置键
///
/// `LUCT_*` 前缀变量由 Environment 源统一处理，这里只列出不带前缀的别名。
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("APP_ENV", "app.environment"),
    ("RUST_LOG", "app.log_level"),
    ("SERVER_HOST", "server.host"),
    ("SERVER_PORT", "server.port"),
    ("UNIX_SOCKET", "server.unix_socket_path"),
    ("CPU_COUNT", "server.workers"),
    ("JWT_SECRET", "jwt.secret"),
    ("DATABASE_URL", "database.url"),
    ("PRL_DEFAULT_FACULTY_ID", "reports.prl_default_faculty_id"),
    ("EXPORT_TITLE", "reports.export_title"),
];

/// 仓库自带的默认 JWT 密钥，生产环境禁止使用
const PLACEHOLDER_JWT_SECRET: &str = "change-me-in-production";

impl AppConfig {
    /// 加载配置
    ///
    /// 优先级从低到高：config.toml、config.<APP_ENV>.toml、LUCT_* 环境变量、裸环境变量
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name(&format!("config.{app_env}")).required(false))
            .add_source(
                Environment::with_prefix("LUCT")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = apply_env_overrides(builder)?.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;
        app_config.finalize()?;
        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    // 补全派生值并检查取值范围
    fn finalize(&mut self) -> Result<(), ConfigError> {
        if self.server.max_workers == 0 {
            return Err(ConfigError::Message(
                "server.max_workers must be at least 1".into(),
            ));
        }
        if self.server.workers == 0 {
            self.server.workers = num_cpus::get().min(self.server.max_workers);
        }

        if self.jwt.secret.trim().is_empty() {
            return Err(ConfigError::Message("jwt.secret must not be empty".into()));
        }
        if self.is_production() && self.jwt.secret == PLACEHOLDER_JWT_SECRET {
            return Err(ConfigError::Message(
                "jwt.secret still uses the bundled placeholder; set JWT_SECRET".into(),
            ));
        }

        if self.rate_limit.window_secs == 0 {
            return Err(ConfigError::Message(
                "rate_limit.window_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 服务器监听目标，配置了 Unix 套接字时优先使用
    pub fn listener(&self) -> Listener {
        #[cfg(unix)]
        if !self.server.unix_socket_path.is_empty() {
            return Listener::Unix(self.server.unix_socket_path.clone());
        }
        Listener::Tcp(format!("{}:{}", self.server.host, self.server.port))
    }
}

/// 服务器监听目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listener {
    Tcp(String),
    #[cfg(unix)]
    Unix(String),
}

impl std::fmt::Display for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Listener::Tcp(addr) => write!(f, "http://{addr}"),
            #[cfg(unix)]
            Listener::Unix(path) => write!(f, "unix:{path}"),
        }
    }
}

fn apply_env_overrides(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    for (var, key) in ENV_OVERRIDES {
        builder = builder.set_override_option(*key, std::env::var(var).ok())?;
    }
    Ok(builder)
}
