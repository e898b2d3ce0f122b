// ==========================================
// 批量线索导入 - 导入层
// ==========================================
// 职责: 分隔文本 → 规范化线索记录 + 行错误报告 + 文件级统计
// 支持: 竖线 / 逗号 / 制表符 / 分号分隔,有无表头均可
// ==========================================

// 模块声明
pub mod address_parser;
pub mod data_cleaner;
pub mod date_normalizer;
pub mod delimiter_detector;
pub mod error;
pub mod field_mapper;
pub mod lead_importer_impl;
pub mod lead_importer_trait;
pub mod line_parser;
pub mod name_splitter;
pub mod phone_normalizer;

// 重导出核心类型
pub use address_parser::parse_address;
pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use date_normalizer::normalize_date;
pub use delimiter_detector::DelimiterDetector as DelimiterDetectorImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use lead_importer_impl::LeadImporterImpl;
pub use line_parser::LineParser as LineParserImpl;
pub use name_splitter::split_name;
pub use phone_normalizer::normalize_phone;

// 重导出 Trait 接口
pub use lead_importer_trait::{DataCleaner, DelimiterDetector, FieldMapper, LeadImporter, LineParser};
