// ==========================================
// 批量线索导入 - 领域模型层
// ==========================================
// 职责: 定义解析记录、行错误、统计与规范字段类型
// 红线: 不含解析逻辑
// ==========================================

pub mod lead;
pub mod types;

// 重导出核心类型
pub use lead::{LineError, ParseResult, ParseStats, ParsedAddress, ParsedRecord};
pub use types::{Delimiter, DetectedFormat, FieldTag};
