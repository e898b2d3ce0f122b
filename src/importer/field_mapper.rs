// ==========================================
// 批量线索导入 - 字段顺序推断器实现
// ==========================================
// 职责: 源列位置 → 规范字段标签
// 路径 A（表头）: 首行任一单元格命中别名表或表头前缀 → 逐列查别名表
// 路径 B（数据）: 按 DATA_SHAPE_RULES 顺序逐条判定,首个命中即止
// ==========================================

use crate::domain::types::{Delimiter, FieldTag};
use crate::importer::lead_importer_trait::FieldMapper as FieldMapperTrait;
use once_cell::sync::Lazy;
use regex::Regex;

// ==========================================
// 表头别名表（英文 / 德文）
// ==========================================
// 键均为小写
pub const HEADER_ALIASES: &[(&str, FieldTag)] = &[
    // 全名
    ("name", FieldTag::Name),
    ("full_name", FieldTag::Name),
    ("fullname", FieldTag::Name),
    ("full name", FieldTag::Name),
    ("kunde", FieldTag::Name),
    ("kundenname", FieldTag::Name),
    ("kontakt", FieldTag::Name),
    ("kontaktname", FieldTag::Name),
    ("vollständiger name", FieldTag::Name),
    // 名
    ("first_name", FieldTag::FirstName),
    ("firstname", FieldTag::FirstName),
    ("first name", FieldTag::FirstName),
    ("first", FieldTag::FirstName),
    ("given_name", FieldTag::FirstName),
    ("vorname", FieldTag::FirstName),
    // 姓
    ("last_name", FieldTag::LastName),
    ("lastname", FieldTag::LastName),
    ("last name", FieldTag::LastName),
    ("last", FieldTag::LastName),
    ("surname", FieldTag::LastName),
    ("family_name", FieldTag::LastName),
    ("nachname", FieldTag::LastName),
    ("familienname", FieldTag::LastName),
    // 电话
    ("phone", FieldTag::Phone),
    ("phone_number", FieldTag::Phone),
    ("phone number", FieldTag::Phone),
    ("mobile", FieldTag::Phone),
    ("tel", FieldTag::Phone),
    ("tel.", FieldTag::Phone),
    ("telefon", FieldTag::Phone),
    ("telefonnummer", FieldTag::Phone),
    ("handy", FieldTag::Phone),
    ("mobil", FieldTag::Phone),
    ("mobilnummer", FieldTag::Phone),
    // 出生日期
    ("dob", FieldTag::Dob),
    ("date_of_birth", FieldTag::Dob),
    ("date of birth", FieldTag::Dob),
    ("birthday", FieldTag::Dob),
    ("birthdate", FieldTag::Dob),
    ("geburtsdatum", FieldTag::Dob),
    ("geburtstag", FieldTag::Dob),
    ("geb.", FieldTag::Dob),
    // 地址
    ("address", FieldTag::Address),
    ("full_address", FieldTag::Address),
    ("adresse", FieldTag::Address),
    ("anschrift", FieldTag::Address),
    // 街道
    ("street", FieldTag::Street),
    ("strasse", FieldTag::Street),
    ("straße", FieldTag::Street),
    ("str.", FieldTag::Street),
    // 门牌号
    ("street_number", FieldTag::StreetNumber),
    ("house_number", FieldTag::StreetNumber),
    ("housenumber", FieldTag::StreetNumber),
    ("hausnummer", FieldTag::StreetNumber),
    ("hausnr", FieldTag::StreetNumber),
    ("hnr", FieldTag::StreetNumber),
    ("nr", FieldTag::StreetNumber),
    ("nr.", FieldTag::StreetNumber),
    // 邮编
    ("plz", FieldTag::Plz),
    ("zip", FieldTag::Plz),
    ("zip_code", FieldTag::Plz),
    ("zipcode", FieldTag::Plz),
    ("postal_code", FieldTag::Plz),
    ("postcode", FieldTag::Plz),
    ("postleitzahl", FieldTag::Plz),
    // 城市
    ("city", FieldTag::City),
    ("town", FieldTag::City),
    ("stadt", FieldTag::City),
    ("ort", FieldTag::City),
    ("wohnort", FieldTag::City),
    // 邮箱
    ("email", FieldTag::Email),
    ("e-mail", FieldTag::Email),
    ("e_mail", FieldTag::Email),
    ("mail", FieldTag::Email),
    ("email_address", FieldTag::Email),
    ("e-mail-adresse", FieldTag::Email),
];

static HEADER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(name|phone|email|address|dob)").unwrap());
// 数字只匹配 ASCII;\s 保持 Unicode 空白
static PHONE_LIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9][0-9\s\-()]{8,}$").unwrap());
static GERMAN_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static FIVE_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{5}").unwrap());
static LEADING_PLZ_WITH_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5}\s+.+").unwrap());

// ==========================================
// 数据形态判定链
// ==========================================
// 顺序即优先级,调整顺序会改变分类结果
pub struct ShapeRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub tag: FieldTag,
}

pub const DATA_SHAPE_RULES: &[ShapeRule] = &[
    ShapeRule {
        name: "phone_like",
        matches: is_phone_like,
        tag: FieldTag::Phone,
    },
    ShapeRule {
        name: "german_date",
        matches: is_german_date,
        tag: FieldTag::Dob,
    },
    ShapeRule {
        name: "email",
        matches: is_email,
        tag: FieldTag::Email,
    },
    ShapeRule {
        name: "plz_with_separator",
        matches: has_plz_and_separator,
        tag: FieldTag::Address,
    },
    ShapeRule {
        name: "leading_plz_with_text",
        matches: starts_with_plz_and_text,
        tag: FieldTag::Address,
    },
];

fn is_phone_like(cell: &str) -> bool {
    PHONE_LIKE.is_match(cell)
}

fn is_german_date(cell: &str) -> bool {
    GERMAN_DATE.is_match(cell)
}

fn is_email(cell: &str) -> bool {
    EMAIL.is_match(cell)
}

fn has_plz_and_separator(cell: &str) -> bool {
    FIVE_DIGITS.is_match(cell) && (cell.contains(',') || cell.contains(' '))
}

fn starts_with_plz_and_text(cell: &str) -> bool {
    LEADING_PLZ_WITH_TEXT.is_match(cell)
}

/// 查询表头别名表（键需已小写）
pub fn lookup_header_alias(cell: &str) -> Option<FieldTag> {
    HEADER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == cell)
        .map(|(_, tag)| *tag)
}

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn infer_field_order(&self, first_line: &str, delimiter: Delimiter) -> Vec<FieldTag> {
        let cells: Vec<String> = first_line
            .split(delimiter.as_char())
            .map(|cell| cell.trim().to_lowercase())
            .collect();

        if self.looks_like_header(&cells) {
            cells
                .iter()
                .map(|cell| lookup_header_alias(cell).unwrap_or(FieldTag::Unknown))
                .collect()
        } else {
            self.classify_data_cells(&cells)
        }
    }
}

impl FieldMapper {
    /// 表头判定: 任一单元格命中别名表或表头前缀
    fn looks_like_header(&self, cells: &[String]) -> bool {
        cells
            .iter()
            .any(|cell| lookup_header_alias(cell).is_some() || HEADER_PREFIX.is_match(cell))
    }

    /// 按数据形态逐列分类,未命中规则的首列记为 name
    fn classify_data_cells(&self, cells: &[String]) -> Vec<FieldTag> {
        let mut tags = Vec::with_capacity(cells.len());
        let mut name_assigned = false;

        for cell in cells {
            let tag = match DATA_SHAPE_RULES.iter().find(|rule| (rule.matches)(cell)) {
                Some(rule) => rule.tag,
                None if !name_assigned => {
                    name_assigned = true;
                    FieldTag::Name
                }
                None => FieldTag::Unknown,
            };
            tags.push(tag);
        }

        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infer(line: &str, delimiter: Delimiter) -> Vec<FieldTag> {
        FieldMapper.infer_field_order(line, delimiter)
    }

    #[test]
    fn test_english_header() {
        assert_eq!(
            infer("Name,Phone,Email,Address", Delimiter::Comma),
            vec![FieldTag::Name, FieldTag::Phone, FieldTag::Email, FieldTag::Address]
        );
    }

    #[test]
    fn test_german_header() {
        assert_eq!(
            infer("Vorname;Nachname;Telefon;Geburtsdatum;Straße;Hausnummer;PLZ;Ort", Delimiter::Semicolon),
            vec![
                FieldTag::FirstName,
                FieldTag::LastName,
                FieldTag::Phone,
                FieldTag::Dob,
                FieldTag::Street,
                FieldTag::StreetNumber,
                FieldTag::Plz,
                FieldTag::City,
            ]
        );
    }

    #[test]
    fn test_header_unknown_columns() {
        // 前缀命中触发表头路径,但未收录的列仍为 unknown
        assert_eq!(
            infer("phone_private|Notiz|E-Mail", Delimiter::Pipe),
            vec![FieldTag::Unknown, FieldTag::Unknown, FieldTag::Email]
        );
    }

    #[test]
    fn test_data_shape_classification() {
        assert_eq!(
            infer(
                "Anna Meyer|030 1234567|03.05.1991|Lindenstr. 13, 34212 Melsungen|anna@example.de",
                Delimiter::Pipe
            ),
            vec![
                FieldTag::Name,
                FieldTag::Phone,
                FieldTag::Dob,
                FieldTag::Address,
                FieldTag::Email,
            ]
        );
    }

    #[test]
    fn test_only_first_unmatched_cell_is_name() {
        assert_eq!(
            infer("Anna Meyer,VIP,Notiz", Delimiter::Comma),
            vec![FieldTag::Name, FieldTag::Unknown, FieldTag::Unknown]
        );
    }

    #[test]
    fn test_plz_with_space_address() {
        assert_eq!(
            infer("Max Muster\t57629 Stein-Wingert", Delimiter::Tab),
            vec![FieldTag::Name, FieldTag::Address]
        );
    }

    #[test]
    fn test_rule_order_phone_before_address() {
        // 9 位以上数字串先命中电话规则
        assert_eq!(
            infer("Max Muster|12345 67890", Delimiter::Pipe),
            vec![FieldTag::Name, FieldTag::Phone]
        );
    }

    #[test]
    fn test_short_number_is_not_phone() {
        assert_eq!(
            infer("1234|Max Muster", Delimiter::Pipe),
            vec![FieldTag::Name, FieldTag::Unknown]
        );
    }

    #[test]
    fn test_rules_order_is_stable() {
        let names: Vec<&str> = DATA_SHAPE_RULES.iter().map(|rule| rule.name).collect();
        assert_eq!(
            names,
            vec![
                "phone_like",
                "german_date",
                "email",
                "plz_with_separator",
                "leading_plz_with_text",
            ]
        );
    }

    #[test]
    fn test_leading_plz_with_non_breaking_space() {
        // 规则 4 只认逗号和普通空格,不间断空格由规则 5 兜住
        let cell = "57629\u{a0}stein-wingert";
        assert!(!has_plz_and_separator(cell));
        assert!(starts_with_plz_and_text(cell));
        assert_eq!(
            infer("Max Muster|57629\u{a0}Stein-Wingert", Delimiter::Pipe),
            vec![FieldTag::Name, FieldTag::Address]
        );
    }

    #[test]
    fn test_non_ascii_digit_date_is_not_dob() {
        assert!(!is_german_date("٠٣.٠٥.١٩٩١"));
        assert_eq!(
            infer("Anna Meyer|٠٣.٠٥.١٩٩١", Delimiter::Pipe),
            vec![FieldTag::Name, FieldTag::Unknown]
        );
    }
}
