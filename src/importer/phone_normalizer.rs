// ==========================================
// 批量线索导入 - 电话规范化
// ==========================================
// 职责: 德国电话前缀 → +49 国际格式
// 规则: 0049… / 49… / 0… 依次判定,其余原样返回
// 说明: 仅做格式改写,不校验号码真实性
// ==========================================

const COUNTRY_PREFIX: &str = "+49";

/// 规范化电话号码
///
/// 先移除空白与 `-` `(` `)` `.`,再按前缀改写为 `+49` 形式。
pub fn normalize_phone(value: &str) -> String {
    let digits: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')' | '.'))
        .collect();

    if digits.is_empty() {
        return digits;
    }

    if let Some(rest) = digits.strip_prefix("0049") {
        format!("{}{}", COUNTRY_PREFIX, rest)
    } else if let Some(rest) = digits.strip_prefix("49") {
        format!("{}{}", COUNTRY_PREFIX, rest)
    } else if digits.starts_with('0') && !digits.starts_with("00") {
        format!("{}{}", COUNTRY_PREFIX, &digits[1..])
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_national_format() {
        assert_eq!(normalize_phone("030 1234567"), "+49301234567");
        assert_eq!(normalize_phone("(0151) 234-567.89"), "+4915123456789");
    }

    #[test]
    fn test_already_international() {
        assert_eq!(normalize_phone("+49 151 23456789"), "+4915123456789");
        assert_eq!(normalize_phone("+43 1 234567"), "+431234567");
    }

    #[test]
    fn test_double_zero_prefix() {
        assert_eq!(normalize_phone("0049 30 1234567"), "+49301234567");
        // 其他国家的 00 前缀不改写
        assert_eq!(normalize_phone("0043 1 234567"), "00431234567");
    }

    #[test]
    fn test_bare_country_code() {
        assert_eq!(normalize_phone("49 30 1234567"), "+49301234567");
    }

    #[test]
    fn test_empty_and_unchanged() {
        assert_eq!(normalize_phone(""), "");
        assert_eq!(normalize_phone("  "), "");
        assert_eq!(normalize_phone("12345"), "12345");
    }
}
