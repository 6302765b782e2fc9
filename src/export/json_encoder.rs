// ==========================================
// 工业站点智能看板 - JSON 导出编码器
// ==========================================
// 职责: 全量数据集 → 缩进 JSON
// 红线: 不受当前筛选/排序状态影响，始终导出全部数据
// ==========================================

use crate::domain::Dataset;
use crate::export::error::ExportResult;

/// 导出为缩进 JSON（两个空格缩进）
///
/// 相同输入产生逐字节相同的输出
pub fn to_json(dataset: &Dataset) -> ExportResult<String> {
    let json = serde_json::to_string_pretty(dataset)?;
    tracing::debug!(sites = dataset.sites.len(), bytes = json.len(), "JSON 导出完成");
    Ok(json)
}
