// ==========================================
// 批量线索导入规范化 - 核心库
// ==========================================
// 系统定位: 上传接口的解析内核（纯函数,无 I/O,无持久化）
// 输入: 分隔文本（CSV/TSV/竖线/分号,有无表头,中英德混合列名）
// 输出: 规范化线索 + 行错误报告 + 文件级统计
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录与类型
pub mod domain;

// 导入层 - 解析管道
pub mod importer;

// 配置层 - 导入参数
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::{ImportConfig, ImportConfigReader};
pub use domain::{
    Delimiter, DetectedFormat, FieldTag, LineError, ParseResult, ParseStats, ParsedAddress,
    ParsedRecord,
};
pub use importer::{ImportError, ImportResult, LeadImporter, LeadImporterImpl};

// ==========================================
// 便捷入口
// ==========================================

/// 预览默认行数
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// 使用默认配置解析导入文件
pub fn parse_import_file(content: &str) -> ParseResult {
    LeadImporterImpl::<ImportConfig>::default().parse_import_file(content)
}

/// 使用默认配置预览导入文件（leads/errors 截断,stats 描述整个文件）
pub fn preview_import_file(content: &str, max_rows: usize) -> ParseResult {
    LeadImporterImpl::<ImportConfig>::default().preview_import_file(content, max_rows)
}

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "批量线索导入规范化";
