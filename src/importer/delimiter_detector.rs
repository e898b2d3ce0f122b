// ==========================================
// 批量线索导入 - 分隔符检测
// ==========================================
// 规则: 取前 N 个非空行,统计各候选分隔符出现总次数
//       严格大于才替换当前最优,初始最优为 '|'
// 限制: 不支持引号转义,含逗号的引号字段会被错误切分
// ==========================================

use crate::domain::types::Delimiter;
use crate::importer::lead_importer_trait::DelimiterDetector as DelimiterDetectorTrait;

/// 默认采样行数
pub const DEFAULT_SAMPLE_LINES: usize = 10;

pub struct DelimiterDetector {
    sample_lines: usize,
}

impl DelimiterDetector {
    pub fn new(sample_lines: usize) -> Self {
        Self { sample_lines }
    }
}

impl Default for DelimiterDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_LINES)
    }
}

impl DelimiterDetectorTrait for DelimiterDetector {
    fn detect_delimiter(&self, lines: &[&str]) -> Delimiter {
        let sample: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|line| !line.trim().is_empty())
            .take(self.sample_lines)
            .collect();

        let mut best = Delimiter::Pipe;
        let mut best_count = 0usize;

        for candidate in Delimiter::CANDIDATES {
            let target = candidate.as_char();
            let count: usize = sample
                .iter()
                .map(|line| line.chars().filter(|&c| c == target).count())
                .sum();

            if count > best_count {
                best = candidate;
                best_count = count;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(lines: &[&str]) -> Delimiter {
        DelimiterDetector::default().detect_delimiter(lines)
    }

    #[test]
    fn test_detect_pipe() {
        assert_eq!(detect(&["a|b|c", "d|e|f"]), Delimiter::Pipe);
    }

    #[test]
    fn test_detect_comma() {
        assert_eq!(detect(&["a,b,c", "d,e,f"]), Delimiter::Comma);
    }

    #[test]
    fn test_detect_tab_and_semicolon() {
        assert_eq!(detect(&["a\tb\tc", "d\te\tf"]), Delimiter::Tab);
        assert_eq!(detect(&["a;b;c", "d;e;f"]), Delimiter::Semicolon);
    }

    #[test]
    fn test_default_when_absent() {
        assert_eq!(detect(&["no delimiters here"]), Delimiter::Pipe);
        assert_eq!(detect(&[]), Delimiter::Pipe);
    }

    #[test]
    fn test_tie_goes_to_earlier_candidate() {
        // 逗号与分号各 2 次 → 逗号先检测
        assert_eq!(detect(&["a,b;c", "d,e;f"]), Delimiter::Comma);
        // 竖线与逗号平局 → 竖线
        assert_eq!(detect(&["a|b,c"]), Delimiter::Pipe);
    }

    #[test]
    fn test_semicolon_beats_comma_in_address() {
        assert_eq!(
            detect(&[
                "Anna Meyer;Lindenstr. 13, 34212 Melsungen;030 1234567",
                "Max Muster;Hauptstr. 1, 10115 Berlin;040 998877",
            ]),
            Delimiter::Semicolon
        );
    }

    #[test]
    fn test_sample_limited_to_first_lines() {
        let mut lines = vec!["a,b"; 10];
        lines.extend(vec!["a;b;c;d;e"; 5]);
        assert_eq!(DelimiterDetector::new(10).detect_delimiter(&lines), Delimiter::Comma);
        assert_eq!(DelimiterDetector::new(15).detect_delimiter(&lines), Delimiter::Semicolon);
    }

    #[test]
    fn test_blank_lines_not_sampled() {
        let lines = ["", "   ", "a;b"];
        assert_eq!(DelimiterDetector::new(1).detect_delimiter(&lines), Delimiter::Semicolon);
    }
}
