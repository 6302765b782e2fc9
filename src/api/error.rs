// ==========================================
// 工业站点智能看板 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换导入/导出错误为用户可读的错误消息
// ==========================================

use crate::export::ExportError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    /// 对比需要恰好两个站点
    #[error("站点对比不可用: 需要选择 2 个站点，当前 {selected} 个")]
    ComparisonUnavailable { selected: usize },

    // ==========================================
    // 导入/导出错误
    // ==========================================
    #[error("数据集加载失败: {0}")]
    ImportError(String),

    #[error("数据导出失败: {0}")]
    ExportError(String),
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::FileNotFound(path) => {
                ApiError::NotFound(format!("数据集文件(path={})不存在", path))
            }
            other => ApiError::ImportError(other.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::UnsupportedFormat(format) => {
                ApiError::InvalidInput(format!("不支持的导出格式: {}", format))
            }
            other => ApiError::ExportError(other.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
