// ==========================================
// 工业站点智能看板 - CSV 导出编码器
// ==========================================
// 职责: 全量数据集 → 机器级平铺 CSV
// 格式: 15 列，逗号分隔，`\n` 连接，末行无换行
// ==========================================
// 已知限制: 字段值不做引号/转义处理
// 错误描述中含逗号时该行列数会错位（保持数据源看板的行为）
// ==========================================

use crate::domain::{Dataset, Department, Machine, Site};
use crate::export::error::{ExportError, ExportResult};
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// CSV 列名（顺序固定）
pub const CSV_COLUMNS: [&str; 15] = [
    "site_id",
    "site_name",
    "location",
    "department_id",
    "department_name",
    "department_head",
    "machine_id",
    "machine_type",
    "status",
    "temperature",
    "vibration",
    "energy_consumption_kWh",
    "last_maintenance",
    "error",
    "uptime_hours",
];

/// 导出为 CSV
///
/// 遍历顺序: 站点 → 部门 → 机器（均按数据集顺序）
/// 数据集中没有任何机器时，表头行为空，输出空字符串
pub fn to_csv(dataset: &Dataset) -> ExportResult<String> {
    let rows: Vec<[String; 15]> = dataset
        .sites
        .iter()
        .flat_map(|site| {
            site.departments.iter().flat_map(move |dept| {
                dept.machines.iter().map(move |machine| to_row(site, dept, machine))
            })
        })
        .collect();

    if rows.is_empty() {
        tracing::warn!("数据集中没有机器，CSV 仅含空表头");
        return Ok(String::new());
    }

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_COLUMNS)?;
    for row in &rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::CsvWriteError(e.to_string()))?;
    let mut content =
        String::from_utf8(bytes).map_err(|e| ExportError::CsvWriteError(e.to_string()))?;

    // 行之间以 `\n` 连接，去掉末尾换行
    if content.ends_with('\n') {
        content.pop();
    }

    tracing::debug!(rows = rows.len(), "CSV 导出完成");
    Ok(content)
}

/// 单行数据（null 错误描述输出为空）
fn to_row(site: &Site, dept: &Department, machine: &Machine) -> [String; 15] {
    [
        site.site_id.clone(),
        site.site_name.clone(),
        site.location.clone(),
        dept.department_id.clone(),
        dept.department_name.clone(),
        dept.head.clone(),
        machine.machine_id.clone(),
        machine.machine_type.clone(),
        machine.status.to_string(),
        machine.temperature.to_string(),
        machine.vibration.to_string(),
        machine.energy_consumption_kwh.to_string(),
        machine.last_maintenance.clone(),
        machine.error.clone().unwrap_or_default(),
        machine.uptime_hours.to_string(),
    ]
}
