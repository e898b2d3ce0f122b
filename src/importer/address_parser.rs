// ==========================================
// 批量线索导入 - 地址解析
// ==========================================
// 职责: 自由文本地址 → 街道 / 门牌号 / PLZ / 城市
// 输入形态:
//   "Lindenstr. 13, 34212 Melsungen"  (逗号分段)
//   "57629 Stein-Wingert"             (PLZ + 城市)
// 说明: 第三段（城区）目前不并入任何字段
// ==========================================

use crate::domain::lead::ParsedAddress;
use once_cell::sync::Lazy;
use regex::Regex;

// 数字与词边界只按 ASCII 判定
static STANDALONE_PLZ: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?-u:\b)([0-9]{5})(?-u:\b)").unwrap());
static STREET_WITH_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s+([0-9]+[A-Za-z]?)$").unwrap());
static PLZ_CITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]{5})\s+(.+)$").unwrap());
static LEADING_PLZ: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5}\s+").unwrap());

/// 解析自由文本地址
pub fn parse_address(address: &str) -> ParsedAddress {
    let trimmed = address.trim();

    let mut parsed = ParsedAddress {
        full_address: trimmed.to_string(),
        ..Default::default()
    };

    // 兜底 PLZ: 任意位置的独立 5 位数字
    parsed.plz = STANDALONE_PLZ
        .captures(trimmed)
        .map(|caps| caps[1].to_string());

    let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();

    if parts.len() >= 2 {
        // 第一段: 街道 + 可选门牌号
        match STREET_WITH_NUMBER.captures(parts[0]) {
            Some(caps) => {
                parsed.street = Some(caps[1].to_string());
                parsed.street_number = Some(caps[2].to_string());
            }
            None => parsed.street = non_empty(parts[0]),
        }

        // 第二段: "PLZ 城市" 优先覆盖兜底 PLZ
        if let Some(caps) = PLZ_CITY.captures(parts[1]) {
            parsed.plz = Some(caps[1].to_string());
            parsed.city = Some(caps[2].to_string());
        } else if parsed.plz.is_none() {
            parsed.city = non_empty(parts[1]);
        } else {
            parsed.city = non_empty(&LEADING_PLZ.replace(parts[1], ""));
        }

        // 第三段（城区）暂不处理
    } else if let Some(caps) = PLZ_CITY.captures(trimmed) {
        parsed.plz = Some(caps[1].to_string());
        parsed.city = Some(caps[2].to_string());
    }

    parsed
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
