// ==========================================
// 批量线索导入 - 日志初始化
// ==========================================
// 说明: 本库只产生 tracing 事件（目标 lead_import::importer::*）
//       订阅器由宿主进程安装;init 供独立使用或宿主未配置时调用
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 未设置 RUST_LOG 时的默认过滤规则: 本库 info,其余 warn
pub const DEFAULT_LOG_FILTER: &str = "warn,lead_import=info";

/// 测试默认过滤规则: 输出逐行解析的 debug 事件
pub const TEST_LOG_FILTER: &str = "warn,lead_import=debug";

fn filter_or(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// 安装全局 fmt 订阅器
///
/// # 环境变量
/// - RUST_LOG: 覆盖 DEFAULT_LOG_FILTER,例如 RUST_LOG=lead_import=debug
///
/// # 返回
/// - false: 已有全局订阅器（宿主已配置）,本次调用不生效
pub fn init() -> bool {
    fmt()
        .with_env_filter(filter_or(DEFAULT_LOG_FILTER))
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .is_ok()
}

/// 测试日志: 输出到测试捕获器,可重复调用
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(filter_or(TEST_LOG_FILTER))
        .with_test_writer()
        .try_init();
}
