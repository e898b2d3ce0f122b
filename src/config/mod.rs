// ==========================================
// 批量线索导入 - 配置层
// ==========================================
// 职责: 导入参数管理（采样行数 / 预览行数 / 行长度上限 / 日期校验）
// ==========================================

pub mod import_config;
pub mod import_config_trait;

// 重导出核心配置
pub use import_config::{config_keys, ImportConfig};
pub use import_config_trait::ImportConfigReader;
