// ==========================================
// 批量线索导入 - 领域类型定义
// ==========================================
// 职责: 规范字段标签 / 分隔符 / 文件格式
// 红线: FieldTag 是推断器与行解析器之间的唯一契约
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 规范字段标签 (Canonical Field Tag)
// ==========================================
// 封闭集合,行解析器对其做穷尽匹配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldTag {
    Name,         // 全名（待拆分）
    FirstName,    // 名
    LastName,     // 姓
    Phone,        // 电话
    Dob,          // 出生日期
    Address,      // 自由文本地址（待解析）
    Street,       // 街道
    StreetNumber, // 门牌号
    Plz,          // 邮编 (Postleitzahl)
    City,         // 城市
    Email,        // 邮箱
    Unknown,      // 未识别列（跳过）
}

impl FieldTag {
    /// 规范名称（与 JSON 序列化一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldTag::Name => "name",
            FieldTag::FirstName => "first_name",
            FieldTag::LastName => "last_name",
            FieldTag::Phone => "phone",
            FieldTag::Dob => "dob",
            FieldTag::Address => "address",
            FieldTag::Street => "street",
            FieldTag::StreetNumber => "street_number",
            FieldTag::Plz => "plz",
            FieldTag::City => "city",
            FieldTag::Email => "email",
            FieldTag::Unknown => "unknown",
        }
    }

    /// 从规范名或行解析别名解析标签
    ///
    /// 大小写不敏感,未识别的字符串映射为 Unknown
    pub fn from_alias(value: &str) -> FieldTag {
        match value.trim().to_lowercase().as_str() {
            "name" | "full_name" => FieldTag::Name,
            "first_name" => FieldTag::FirstName,
            "last_name" => FieldTag::LastName,
            "phone" | "telefon" | "mobile" | "handy" => FieldTag::Phone,
            "dob" | "date_of_birth" | "geburtsdatum" | "birthday" => FieldTag::Dob,
            "address" | "adresse" => FieldTag::Address,
            "street" | "strasse" => FieldTag::Street,
            "street_number" | "hausnummer" => FieldTag::StreetNumber,
            "plz" | "zip" | "postal_code" => FieldTag::Plz,
            "city" | "stadt" | "ort" => FieldTag::City,
            "email" | "e-mail" => FieldTag::Email,
            _ => FieldTag::Unknown,
        }
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 分隔符 (Delimiter)
// ==========================================
// 检测顺序即 CANDIDATES 顺序,平局时先检测者胜出
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    #[default]
    Pipe,      // |
    Comma,     // ,
    Tab,       // \t
    Semicolon, // ;
}

impl Delimiter {
    /// 候选分隔符（按检测顺序）
    pub const CANDIDATES: [Delimiter; 4] = [
        Delimiter::Pipe,
        Delimiter::Comma,
        Delimiter::Tab,
        Delimiter::Semicolon,
    ];

    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Pipe => '|',
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Semicolon => ';',
        }
    }

    /// 人类可读名称（用于统计输出）
    pub fn name(&self) -> &'static str {
        match self {
            Delimiter::Pipe => "pipe",
            Delimiter::Comma => "comma",
            Delimiter::Tab => "tab",
            Delimiter::Semicolon => "semicolon",
        }
    }

    pub fn from_char(c: char) -> Option<Delimiter> {
        Delimiter::CANDIDATES
            .iter()
            .copied()
            .find(|d| d.as_char() == c)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ==========================================
// 文件格式 (Detected Format)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectedFormat {
    CsvWithHeader, // 首行为表头
    DelimitedData, // 无表头,首行即数据
}

impl DetectedFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectedFormat::CsvWithHeader => "csv_with_header",
            DetectedFormat::DelimitedData => "delimited_data",
        }
    }
}

impl fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
