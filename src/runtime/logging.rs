//! 日志初始化
//!
//! 开发环境输出带文件名和行号的可读格式，其余环境输出 JSON 便于采集。

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// 初始化全局 tracing 订阅者
///
/// 返回的 guard 必须在 main 中持有到进程退出，否则缓冲中的日志会丢失
pub fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    // RUST_LOG 已经在配置层覆盖 app.log_level，这里不再读取环境变量
    let filter = EnvFilter::try_new(&config.app.log_level).unwrap_or_else(|e| {
        eprintln!(
            "Invalid log level '{}': {e}, falling back to info",
            config.app.log_level
        );
        EnvFilter::new("info")
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_level(true);

    if config.is_development() {
        subscriber
            .with_ansi(true)
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        subscriber.with_ansi(false).json().init();
    }

    guard
}
