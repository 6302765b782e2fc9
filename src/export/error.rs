// ==========================================
// 工业站点智能看板 - 导出模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    // ===== 编码错误 =====
    #[error("JSON 序列化失败: {0}")]
    JsonEncodeError(String),

    #[error("CSV 写出失败: {0}")]
    CsvWriteError(String),

    // ===== 文件错误 =====
    #[error("导出目录创建失败 ({path}): {message}")]
    DirectoryError { path: String, message: String },

    #[error("文件写入失败: {0}")]
    FileWriteError(String),

    #[error("不支持的导出格式: {0}（仅支持 json/csv）")]
    UnsupportedFormat(String),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::FileWriteError(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::JsonEncodeError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvWriteError(err.to_string())
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
