// ==========================================
// 工业站点智能看板 - 导出层
// ==========================================
// 职责: 全量数据集导出为 JSON / CSV 文件
// 红线: 纯函数编码，不依赖时钟与界面状态
// ==========================================

pub mod csv_encoder;
pub mod error;
pub mod json_encoder;

pub use csv_encoder::{to_csv, CSV_COLUMNS};
pub use error::{ExportError, ExportResult};
pub use json_encoder::to_json;

use crate::domain::Dataset;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// 导出文件基础名
pub const EXPORT_BASENAME: &str = "industrial_sites_data";

// ==========================================
// 导出格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// 从字符串解析格式（不区分大小写）
    pub fn parse(s: &str) -> ExportResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }

    /// 导出文件名
    pub fn file_name(&self) -> String {
        match self {
            ExportFormat::Json => format!("{}.json", EXPORT_BASENAME),
            ExportFormat::Csv => format!("{}.csv", EXPORT_BASENAME),
        }
    }

    /// 编码数据集
    pub fn encode(&self, dataset: &Dataset) -> ExportResult<String> {
        match self {
            ExportFormat::Json => to_json(dataset),
            ExportFormat::Csv => to_csv(dataset),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// 将数据集导出到目录
///
/// # 参数
/// - dataset: 全量数据集
/// - format: 导出格式
/// - dir: 输出目录（不存在时自动创建）
///
/// # 返回
/// 写出的文件路径
pub fn write_export(dataset: &Dataset, format: ExportFormat, dir: &Path) -> ExportResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| ExportError::DirectoryError {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;

    let content = format.encode(dataset)?;
    let path = dir.join(format.file_name());
    fs::write(&path, content)?;

    tracing::info!(format = %format, path = %path.display(), "数据集导出完成");
    Ok(path)
}
