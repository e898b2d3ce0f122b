// ==========================================
// 批量线索导入 - 线索导入器实现（文件编排器）
// ==========================================
// 职责: 整合导入流程,从文件文本到解析结果
// 流程: 切行去空 → 分隔符检测 → 字段顺序推断 → 表头判定 → 逐行解析 → 汇总统计
// 红线: 行级失败只记录不中断;唯一的文件级失败是空文件
// 说明: 行号为去除空行后的 1-based 序号,不对应原文件行号
// ==========================================

use crate::config::{ImportConfig, ImportConfigReader};
use crate::domain::lead::{LineError, ParseResult, ParseStats, ParsedRecord};
use crate::domain::types::{Delimiter, DetectedFormat, FieldTag};
use crate::importer::data_cleaner::DataCleaner as DataCleanerImpl;
use crate::importer::delimiter_detector::DelimiterDetector as DelimiterDetectorImpl;
use crate::importer::field_mapper::FieldMapper as FieldMapperImpl;
use crate::importer::lead_importer_trait::{DelimiterDetector, FieldMapper, LeadImporter, LineParser};
use crate::importer::line_parser::LineParser as LineParserImpl;
use tracing::{debug, info, instrument, warn};

// 编排器自身的表头判定关键字（与推断器的表头触发条件相互独立）
pub const HEADER_KEYWORDS: &[&str] = &[
    "name", "phone", "telefon", "email", "address", "adresse", "vorname", "nachname",
];

pub const COULD_NOT_EXTRACT_NAME: &str = "Could not extract name from line";

// ==========================================
// LeadImporterImpl - 线索导入器实现
// ==========================================
pub struct LeadImporterImpl<C>
where
    C: ImportConfigReader,
{
    // 配置读取器
    config: C,

    // 导入组件
    delimiter_detector: Box<dyn DelimiterDetector>,
    field_mapper: Box<dyn FieldMapper>,
    line_parser: Box<dyn LineParser>,
}

impl<C> LeadImporterImpl<C>
where
    C: ImportConfigReader,
{
    /// 创建新的 LeadImporter 实例
    ///
    /// # 参数
    /// - config: 配置读取器
    /// - delimiter_detector: 分隔符检测器
    /// - field_mapper: 字段顺序推断器
    /// - line_parser: 行解析器
    pub fn new(
        config: C,
        delimiter_detector: Box<dyn DelimiterDetector>,
        field_mapper: Box<dyn FieldMapper>,
        line_parser: Box<dyn LineParser>,
    ) -> Self {
        Self {
            config,
            delimiter_detector,
            field_mapper,
            line_parser,
        }
    }

    /// 使用默认组件创建,组件参数取自配置
    pub fn with_config(config: C) -> Self {
        let delimiter_detector = Box::new(DelimiterDetectorImpl::new(config.get_sample_line_count()));
        let line_parser = Box::new(LineParserImpl::new(Box::new(DataCleanerImpl), &config));

        Self::new(config, delimiter_detector, Box::new(FieldMapperImpl), line_parser)
    }

    /// 按配置的默认行数预览
    pub fn preview_with_default_rows(&self, content: &str) -> ParseResult {
        self.preview_import_file(content, self.config.get_default_preview_rows())
    }
}

impl Default for LeadImporterImpl<ImportConfig> {
    fn default() -> Self {
        Self::with_config(ImportConfig::default())
    }
}

impl<C> LeadImporter for LeadImporterImpl<C>
where
    C: ImportConfigReader,
{
    #[instrument(skip(self, content), fields(content_len = content.len()))]
    fn parse_import_file(&self, content: &str) -> ParseResult {
        info!("开始解析导入文件");

        let lines = split_non_blank_lines(content);
        if lines.is_empty() {
            warn!("导入文件为空");
            return ParseResult::empty_file();
        }

        // === 步骤 1: 分隔符检测 ===
        let delimiter = self.delimiter_detector.detect_delimiter(&lines);
        debug!(delimiter = %delimiter, "分隔符检测完成");

        // === 步骤 2: 字段顺序推断 ===
        let field_order = self.field_mapper.infer_field_order(lines[0], delimiter);
        debug!(field_order = ?field_order, "字段顺序推断完成");

        // === 步骤 3: 表头判定（独立于推断器） ===
        let has_header = is_header_row(lines[0], delimiter);
        debug!(has_header = has_header, "表头判定完成");

        self.parse_lines(&lines, delimiter, &field_order, has_header)
    }

    fn preview_import_file(&self, content: &str, max_rows: usize) -> ParseResult {
        let result = self.parse_import_file(content);
        debug!(max_rows = max_rows, "截断预览结果");
        result.truncated(max_rows)
    }

    #[instrument(skip(self, content, delimiter, field_order), fields(delimiter = %delimiter, columns = field_order.len()))]
    fn parse_with_field_order(
        &self,
        content: &str,
        delimiter: Delimiter,
        field_order: &[FieldTag],
        has_header: bool,
    ) -> ParseResult {
        info!("按指定字段顺序解析导入文件");

        let lines = split_non_blank_lines(content);
        if lines.is_empty() {
            warn!("导入文件为空");
            return ParseResult::empty_file();
        }

        self.parse_lines(&lines, delimiter, field_order, has_header)
    }
}

// 辅助方法
impl<C> LeadImporterImpl<C>
where
    C: ImportConfigReader,
{
    /// 逐行解析并汇总结果
    fn parse_lines(
        &self,
        lines: &[&str],
        delimiter: Delimiter,
        field_order: &[FieldTag],
        has_header: bool,
    ) -> ParseResult {
        let start = usize::from(has_header);
        let mut leads: Vec<ParsedRecord> = Vec::new();
        let mut errors: Vec<LineError> = Vec::new();

        for (idx, line) in lines.iter().enumerate().skip(start) {
            let line_number = idx + 1;

            match self.line_parser.parse_line(line, line_number, field_order, delimiter) {
                Ok(record) => {
                    if !record.parse_errors.is_empty() {
                        let message = record.parse_errors.join("; ");
                        warn!(line_number = line_number, error = %message, "行解析存在软错误");
                        errors.push(LineError::new(line_number, message, *line));
                    }

                    if record.has_name() {
                        leads.push(record);
                    } else {
                        warn!(line_number = line_number, "未能提取姓名");
                        errors.push(LineError::new(line_number, COULD_NOT_EXTRACT_NAME, *line));
                    }
                }
                Err(e) => {
                    // ImportError 各变体的 Display 均非空,直接作为错误信息
                    let message = e.to_string();
                    warn!(line_number = line_number, error = %message, "行解析失败");
                    errors.push(LineError::new(line_number, message, *line));
                }
            }
        }

        let format = if has_header {
            DetectedFormat::CsvWithHeader
        } else {
            DetectedFormat::DelimitedData
        };

        let stats = ParseStats::new(
            lines.len() - start,
            leads.len(),
            errors.len(),
            format,
            delimiter,
        );

        info!(
            total = stats.total_lines,
            success = stats.parsed_successfully,
            errors = stats.parse_errors,
            format = %format,
            "导入文件解析完成"
        );

        ParseResult {
            success: !leads.is_empty(),
            leads,
            errors,
            stats,
        }
    }
}

/// 按 `\r?\n` 切行,trim 后丢弃空行
fn split_non_blank_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// 编排器表头判定: 首行任一单元格（小写、trim）命中 HEADER_KEYWORDS
fn is_header_row(first_line: &str, delimiter: Delimiter) -> bool {
    first_line
        .split(delimiter.as_char())
        .map(|cell| cell.trim().to_lowercase())
        .any(|cell| HEADER_KEYWORDS.contains(&cell.as_str()))
}
