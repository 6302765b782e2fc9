// ==========================================
// 工业站点智能看板 - 数据集加载器
// ==========================================
// 职责: 读取打包的 JSON 数据集，构造只读 Dataset
// 阶段:
// 1. 文件存在性 / 扩展名检查
// 2. JSON 反序列化（缺省集合字段按空处理）
// 3. 加载摘要日志
// ==========================================
// 说明: 数值字段不做范围校验，异常值在展示层容忍
// ==========================================

use crate::domain::Dataset;
use crate::importer::error::{ImportError, ImportResult};
use std::fs;
use std::path::Path;

// ==========================================
// DatasetLoader
// ==========================================
pub struct DatasetLoader;

impl DatasetLoader {
    /// 从文件加载数据集
    pub fn load_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Dataset> {
        let path = file_path.as_ref();

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "json" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let content = fs::read_to_string(path)?;
        let dataset = self.load_str(&content)?;

        tracing::info!(
            path = %path.display(),
            sites = dataset.sites.len(),
            machines = dataset.machine_count(),
            "数据集加载完成"
        );
        Ok(dataset)
    }

    /// 从 JSON 文本加载数据集
    pub fn load_str(&self, content: &str) -> ImportResult<Dataset> {
        let dataset: Dataset = serde_json::from_str(content)?;
        Ok(dataset)
    }
}
