// ==========================================
// 批量线索导入 - 姓名拆分
// ==========================================
// 规则: 最后一个词为姓,其余词以单空格拼接为名
// ==========================================

/// 拆分全名为 (名, 姓)
pub fn split_name(full_name: &str) -> (String, String) {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();

    match tokens.as_slice() {
        [] => (String::new(), String::new()),
        [only] => (only.to_string(), String::new()),
        [given @ .., last] => (given.join(" "), last.to_string()),
    }
}
