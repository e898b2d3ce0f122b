// ==========================================
// 批量线索导入 - 线索领域模型
// ==========================================
// 职责: 解析记录 / 行错误 / 文件级统计 / 解析结果
// 红线: raw_line 始终保留原始（已 trim）行文本,供人工复核
// ==========================================

use crate::domain::types::{Delimiter, DetectedFormat};
use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};

// ==========================================
// ParsedRecord - 单行解析记录
// ==========================================
// 用途: 每个非空数据行生成一条,构造后不再修改
// 归属: 由所在 ParseResult 独占
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecord {
    // ===== 姓名 =====
    pub first_name: String, // 名（可为空,此时记录 parse_errors）
    pub last_name: String,  // 姓

    // ===== 联系方式 =====
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>, // +49 规范化后的电话
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>, // ISO 日期字符串（未做日历校验）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>, // 小写邮箱

    // ===== 地址 =====
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plz: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    // ===== 元信息 =====
    pub raw_line: String,          // 原始行文本（已 trim）
    pub parse_errors: Vec<String>, // 本行软错误
}

impl ParsedRecord {
    /// 是否至少有一个非空姓名字段
    pub fn has_name(&self) -> bool {
        !self.first_name.is_empty() || !self.last_name.is_empty()
    }

    /// 拼接全名（缺失部分省略）
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }
}

// ==========================================
// ParsedAddress - 地址解析结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAddress {
    pub street: Option<String>,
    pub street_number: Option<String>,
    pub plz: Option<String>,
    pub city: Option<String>,
    pub full_address: String, // 原始地址（已 trim）
}

// ==========================================
// LineError - 行级错误
// ==========================================
// 用途: 抛错行 / 无姓名行 / 带软校验问题的行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineError {
    pub line_number: usize, // 过滤空行后的 1-based 行号（空文件为 0）
    pub error_message: String,
    pub raw_line: String,
}

impl LineError {
    pub fn new(line_number: usize, error_message: impl Into<String>, raw_line: impl Into<String>) -> Self {
        Self {
            line_number,
            error_message: error_message.into(),
            raw_line: raw_line.into(),
        }
    }
}

// ==========================================
// ParseStats - 文件级统计
// ==========================================
// 红线: 始终描述整个文件,预览截断不改变统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    pub total_lines: usize,         // 数据行数（不含表头）
    pub parsed_successfully: usize, // = leads.len()
    pub parse_errors: usize,        // = errors.len()
    pub detected_format: String,    // csv_with_header / delimited_data（空文件为 ""）
    pub detected_delimiter: String, // pipe / comma / tab / semicolon（空文件为 ""）
}

impl ParseStats {
    pub fn new(
        total_lines: usize,
        parsed_successfully: usize,
        parse_errors: usize,
        format: DetectedFormat,
        delimiter: Delimiter,
    ) -> Self {
        Self {
            total_lines,
            parsed_successfully,
            parse_errors,
            detected_format: format.as_str().to_string(),
            detected_delimiter: delimiter.name().to_string(),
        }
    }
}

// ==========================================
// ParseResult - 解析结果
// ==========================================
// 用途: 编排器返回值,返回后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub success: bool, // = !leads.is_empty()
    pub leads: Vec<ParsedRecord>,
    pub errors: Vec<LineError>,
    pub stats: ParseStats,
}

impl ParseResult {
    /// 空文件结果（唯一的文件级失败形态）
    pub fn empty_file() -> Self {
        Self {
            success: false,
            leads: Vec::new(),
            errors: vec![LineError::new(0, "File is empty", "")],
            stats: ParseStats {
                total_lines: 0,
                parsed_successfully: 0,
                parse_errors: 0,
                detected_format: String::new(),
                detected_delimiter: String::new(),
            },
        }
    }

    /// 预览副本: leads/errors 各自截断,stats 原样保留
    pub fn truncated(&self, max_rows: usize) -> Self {
        Self {
            success: self.success,
            leads: self.leads.iter().take(max_rows).cloned().collect(),
            errors: self.errors.iter().take(max_rows).cloned().collect(),
            stats: self.stats.clone(),
        }
    }

    /// 序列化为 JSON 字符串
    pub fn to_json(&self) -> ImportResult<String> {
        serde_json::to_string(self).map_err(ImportError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(first: &str, last: &str) -> ParsedRecord {
        ParsedRecord {
            first_name: first.to_string(),
            last_name: last.to_string(),
            raw_line: format!("{} {}", first, last),
            ..Default::default()
        }
    }

    #[test]
    fn test_has_name_and_full_name() {
        assert!(record("Anna", "").has_name());
        assert!(record("", "Meyer").has_name());
        assert!(!record("", "").has_name());
        assert_eq!(record("Anna", "Meyer").full_name(), "Anna Meyer");
        assert_eq!(record("", "Meyer").full_name(), "Meyer");
    }

    #[test]
    fn test_empty_file_result() {
        let result = ParseResult::empty_file();
        assert!(!result.success);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].line_number, 0);
        assert_eq!(result.errors[0].error_message, "File is empty");
        assert_eq!(result.stats.detected_delimiter, "");
        assert_eq!(result.stats.detected_format, "");
        assert_eq!(result.stats.total_lines, 0);
    }

    #[test]
    fn test_truncated_keeps_stats() {
        let result = ParseResult {
            success: true,
            leads: vec![record("A", "B"), record("C", "D"), record("E", "F")],
            errors: vec![LineError::new(4, "x", "raw")],
            stats: ParseStats::new(4, 3, 1, DetectedFormat::DelimitedData, Delimiter::Comma),
        };

        let preview = result.truncated(2);

        assert_eq!(preview.leads.len(), 2);
        assert_eq!(preview.errors.len(), 1);
        assert_eq!(preview.stats, result.stats);
        assert_eq!(preview.stats.parsed_successfully, 3);
    }

    #[test]
    fn test_json_omits_unset_optionals() {
        let json = serde_json::to_value(record("Anna", "Meyer")).unwrap();
        assert_eq!(json["first_name"], "Anna");
        assert!(json.get("phone").is_none());
        assert!(json["parse_errors"].as_array().unwrap().is_empty());
    }
}
