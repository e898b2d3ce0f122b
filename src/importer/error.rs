// ==========================================
// 批量线索导入 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 行级错误由编排器捕获并转为 LineError,不会中断整批
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 行解析错误 =====
    #[error("Line {line} exceeds maximum length ({length} > {max} characters)")]
    LineTooLong {
        line: usize,
        length: usize,
        max: usize,
    },

    // ===== 配置错误 =====
    #[error("配置读取失败: {0}")]
    ConfigParseError(String),

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },

    // ===== 序列化错误 =====
    #[error("序列化失败: {0}")]
    SerializationError(String),
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::SerializationError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_too_long_message() {
        let err = ImportError::LineTooLong {
            line: 3,
            length: 120,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "Line 3 exceeds maximum length (120 > 100 characters)"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ImportError = json_err.into();
        assert!(matches!(err, ImportError::SerializationError(_)));
    }
}
