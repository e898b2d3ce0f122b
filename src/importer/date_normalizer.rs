// ==========================================
// 批量线索导入 - 日期规范化
// ==========================================
// 职责: DD.MM.YYYY / DD/MM/YYYY → YYYY-MM-DD
// 说明: 仅做格式改写;无法识别的输入原样返回
//       日历有效性校验见 is_valid_iso_date（由配置开关启用）
// ==========================================

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

// 只接受 ASCII 数字
static GERMAN_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{4})$").unwrap());
static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());
static SLASH_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$").unwrap());

/// 规范化日期为 ISO 格式
pub fn normalize_date(value: &str) -> String {
    let trimmed = value.trim();

    if let Some(caps) = GERMAN_DATE.captures(trimmed) {
        return to_iso(&caps[1], &caps[2], &caps[3]);
    }

    if ISO_DATE.is_match(trimmed) {
        return trimmed.to_string();
    }

    if let Some(caps) = SLASH_DATE.captures(trimmed) {
        return to_iso(&caps[1], &caps[2], &caps[3]);
    }

    value.to_string()
}

/// 判断 ISO 日期字符串是否为真实存在的日历日期
pub fn is_valid_iso_date(value: &str) -> bool {
    ISO_DATE.is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

fn to_iso(day: &str, month: &str, year: &str) -> String {
    format!("{}-{:0>2}-{:0>2}", year, month, day)
}
