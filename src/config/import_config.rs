// ==========================================
// 批量线索导入 - 导入配置
// ==========================================
// 职责: 配置加载（JSON,缺省键取默认值）与校验
// ==========================================

use crate::config::import_config_trait::ImportConfigReader;
use crate::importer::delimiter_detector::DEFAULT_SAMPLE_LINES;
use crate::importer::error::{ImportError, ImportResult};
use crate::DEFAULT_PREVIEW_ROWS;
use serde::{Deserialize, Serialize};

// ==========================================
// ImportConfig - 导入配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub sample_line_count: usize,     // 分隔符检测采样行数
    pub default_preview_rows: usize,  // 预览默认行数
    pub max_line_length: Option<usize>, // 单行最大字符数（None 为不限制）
    pub strict_date_validation: bool, // 出生日期日历校验开关
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            sample_line_count: DEFAULT_SAMPLE_LINES,
            default_preview_rows: DEFAULT_PREVIEW_ROWS,
            max_line_length: None,
            strict_date_validation: false,
        }
    }
}

impl ImportConfig {
    /// 从 JSON 字符串加载配置
    ///
    /// # 参数
    /// - json: 配置 JSON 对象（可只包含部分键）
    ///
    /// # 返回
    /// - Ok(ImportConfig): 加载并校验通过
    /// - Err: JSON 格式错误或取值非法
    pub fn from_json_str(json: &str) -> ImportResult<Self> {
        let config: ImportConfig = serde_json::from_str(json)
            .map_err(|e| ImportError::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置取值
    pub fn validate(&self) -> ImportResult<()> {
        if self.sample_line_count == 0 {
            return Err(ImportError::ConfigValueError {
                key: config_keys::SAMPLE_LINE_COUNT.to_string(),
                value: self.sample_line_count.to_string(),
                message: "采样行数必须大于 0".to_string(),
            });
        }

        if self.max_line_length == Some(0) {
            return Err(ImportError::ConfigValueError {
                key: config_keys::MAX_LINE_LENGTH.to_string(),
                value: "0".to_string(),
                message: "单行最大长度必须大于 0".to_string(),
            });
        }

        Ok(())
    }

    /// 序列化为 JSON 快照
    pub fn to_json(&self) -> ImportResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl ImportConfigReader for ImportConfig {
    fn get_sample_line_count(&self) -> usize {
        self.sample_line_count
    }

    fn get_default_preview_rows(&self) -> usize {
        self.default_preview_rows
    }

    fn get_max_line_length(&self) -> Option<usize> {
        self.max_line_length
    }

    fn is_strict_date_validation(&self) -> bool {
        self.strict_date_validation
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    pub const SAMPLE_LINE_COUNT: &str = "sample_line_count";
    pub const DEFAULT_PREVIEW_ROWS: &str = "default_preview_rows";
    pub const MAX_LINE_LENGTH: &str = "max_line_length";
    pub const STRICT_DATE_VALIDATION: &str = "strict_date_validation";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ImportConfig::default();
        assert_eq!(config.get_sample_line_count(), 10);
        assert_eq!(config.get_default_preview_rows(), 5);
        assert_eq!(config.get_max_line_length(), None);
        assert!(!config.is_strict_date_validation());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ImportConfig::from_json_str(r#"{"strict_date_validation": true}"#).unwrap();
        assert!(config.strict_date_validation);
        assert_eq!(config.sample_line_count, 10);
    }

    #[test]
    fn test_null_line_length_means_unlimited() {
        let config = ImportConfig::from_json_str(r#"{"max_line_length": null}"#).unwrap();
        assert_eq!(config.get_max_line_length(), None);

        let config = ImportConfig::from_json_str(r#"{"max_line_length": 200}"#).unwrap();
        assert_eq!(config.get_max_line_length(), Some(200));
    }

    #[test]
    fn test_invalid_json() {
        let result = ImportConfig::from_json_str("{not json");
        assert!(matches!(result, Err(ImportError::ConfigParseError(_))));
    }

    #[test]
    fn test_zero_sample_rejected() {
        let result = ImportConfig::from_json_str(r#"{"sample_line_count": 0}"#);
        match result {
            Err(ImportError::ConfigValueError { key, .. }) => {
                assert_eq!(key, config_keys::SAMPLE_LINE_COUNT)
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_json_snapshot_keys() {
        let json: serde_json::Value =
            serde_json::from_str(&ImportConfig::default().to_json().unwrap()).unwrap();
        assert_eq!(json[config_keys::DEFAULT_PREVIEW_ROWS], 5);
        assert_eq!(json[config_keys::STRICT_DATE_VALIDATION], false);
    }
}
