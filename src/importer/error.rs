// ==========================================
// 考勤打卡分析 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: SchemaError 为致命错误，整次运行中止，不返回部分结果
// ==========================================

use crate::i18n::t_with_args;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (expected .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("failed to read file: {0}")]
    FileReadError(String),

    #[error("failed to parse Excel workbook: {0}")]
    ExcelParseError(String),

    #[error("failed to parse CSV: {0}")]
    CsvParseError(String),

    // ===== 表结构错误 =====
    #[error("required columns not found: {missing:?} (headers: {headers:?})")]
    SchemaError {
        missing: Vec<String>,
        headers: Vec<String>,
    },

    // ===== 配置错误 =====
    #[error("failed to read config (key: {key}): {message}")]
    ConfigReadError { key: String, message: String },

    #[error("invalid config value (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },

    // ===== 通用错误 =====
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImportError {
    pub fn is_schema_error(&self) -> bool {
        matches!(self, ImportError::SchemaError { .. })
    }

    /// 面向用户的本地化提示（当前语言）
    pub fn user_message(&self) -> String {
        match self {
            ImportError::SchemaError { missing, .. } => t_with_args(
                "identity.schema_error",
                &[("columns", &missing.join(", "))],
            ),
            ImportError::FileNotFound(path) => {
                t_with_args("import.file_not_found", &[("path", path)])
            }
            ImportError::UnsupportedFormat(ext) => {
                t_with_args("import.unsupported_format", &[("ext", ext)])
            }
            other => t_with_args("import.failed", &[("reason", &other.to_string())]),
        }
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
