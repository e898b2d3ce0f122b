// ==========================================
// 批量线索导入 - 导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// 流程: 分隔符检测 → 字段顺序推断 → 逐行解析 → 字段清洗
// 红线: 各组件均为无状态纯函数,调用之间不保留任何状态
// ==========================================

use crate::domain::lead::{ParseResult, ParsedAddress, ParsedRecord};
use crate::domain::types::{Delimiter, FieldTag};
use crate::importer::error::ImportResult;

// ==========================================
// LeadImporter Trait
// ==========================================
// 用途: 线索导入主接口（文件编排器）
// 实现者: LeadImporterImpl
pub trait LeadImporter: Send + Sync {
    /// 解析整个导入文件
    ///
    /// # 参数
    /// - content: 文件文本内容（换行符 `\n` 或 `\r\n`）
    ///
    /// # 返回
    /// - ParseResult: 线索列表 + 行错误 + 文件级统计
    ///
    /// # 说明
    /// - 不返回 Err: 行级失败全部转为 LineError,空文件返回 success=false
    fn parse_import_file(&self, content: &str) -> ParseResult;

    /// 预览导入文件
    ///
    /// # 参数
    /// - content: 文件文本内容
    /// - max_rows: leads 与 errors 各自保留的最大条数
    ///
    /// # 返回
    /// - ParseResult: 截断后的副本,stats 仍描述整个文件
    fn preview_import_file(&self, content: &str, max_rows: usize) -> ParseResult;

    /// 使用调用方给定的字段顺序解析文件（跳过推断）
    ///
    /// # 参数
    /// - content: 文件文本内容
    /// - delimiter: 分隔符
    /// - field_order: 每列对应的规范字段标签
    /// - has_header: 首行是否为表头
    fn parse_with_field_order(
        &self,
        content: &str,
        delimiter: Delimiter,
        field_order: &[FieldTag],
        has_header: bool,
    ) -> ParseResult;
}

// ==========================================
// DelimiterDetector Trait
// ==========================================
// 用途: 分隔符检测接口（阶段 1）
// 实现者: DelimiterDetector
pub trait DelimiterDetector: Send + Sync {
    /// 推断列分隔符
    ///
    /// # 参数
    /// - lines: 文件所有行
    ///
    /// # 返回
    /// - Delimiter: 出现次数最多者;平局取先检测者;均未出现时为 Pipe
    fn detect_delimiter(&self, lines: &[&str]) -> Delimiter;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 字段顺序推断接口（阶段 2）
// 实现者: FieldMapper
pub trait FieldMapper: Send + Sync {
    /// 根据首行推断每列的规范字段标签
    ///
    /// # 参数
    /// - first_line: 文件首个非空行
    /// - delimiter: 已检测的分隔符
    ///
    /// # 返回
    /// - Vec<FieldTag>: 与首行列数一致的标签序列
    fn infer_field_order(&self, first_line: &str, delimiter: Delimiter) -> Vec<FieldTag>;
}

// ==========================================
// LineParser Trait
// ==========================================
// 用途: 单行解析接口（阶段 3）
// 实现者: LineParser
pub trait LineParser: Send + Sync {
    /// 按字段顺序解析一行
    ///
    /// # 参数
    /// - line: 已 trim 的行文本
    /// - line_number: 行号（用于错误信息）
    /// - field_order: 规范字段标签序列
    /// - delimiter: 分隔符
    ///
    /// # 返回
    /// - Ok(ParsedRecord): 解析记录（可能带 parse_errors 软错误）
    /// - Err: 整行无法解析
    fn parse_line(
        &self,
        line: &str,
        line_number: usize,
        field_order: &[FieldTag],
        delimiter: Delimiter,
    ) -> ImportResult<ParsedRecord>;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 字段清洗接口（阶段 4）
// 实现者: DataCleaner
pub trait DataCleaner: Send + Sync {
    /// 电话 → +49 格式
    fn normalize_phone(&self, value: &str) -> String;

    /// 日期 → YYYY-MM-DD（无法识别则原样返回）
    fn normalize_date(&self, value: &str) -> String;

    /// 全名 → (名, 姓)
    fn split_name(&self, full_name: &str) -> (String, String);

    /// 自由文本地址 → 街道 / 门牌号 / PLZ / 城市
    fn parse_address(&self, address: &str) -> ParsedAddress;

    /// 邮箱清洗（TRIM + 小写）
    fn clean_email(&self, value: &str) -> String;
}
