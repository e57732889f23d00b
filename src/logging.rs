// ==========================================
// 交付绩效看板系统 - 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 日志级别优先读 RUST_LOG 环境变量
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 默认日志级别
const DEFAULT_FILTER: &str = "info";

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=delivery_kpi_dashboard=trace
///
/// # 示例
/// ```no_run
/// use delivery_kpi_dashboard::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 固定 debug 级别并写入测试捕获器；重复调用安全（集成测试
/// 内多个用例共享一次初始化）
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
