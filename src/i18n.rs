// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

use crate::domain::{MachineStatus, SeverityTier};

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

/// 对比表指标键（按展示顺序）
pub const COMPARISON_METRIC_KEYS: [&str; 10] = [
    "metric.online",
    "metric.offline",
    "metric.maintenance",
    "metric.error",
    "metric.departments",
    "metric.total_machines",
    "metric.team_members",
    "metric.avg_temp",
    "metric.avg_energy",
    "metric.avg_uptime",
];

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// 不支持的语言代码回退到 zh-CN
pub fn set_locale(locale: &str) {
    if SUPPORTED_LOCALES.contains(&locale) {
        rust_i18n::set_locale(locale);
    } else {
        tracing::warn!(locale, "不支持的语言，回退到 zh-CN");
        rust_i18n::set_locale("zh-CN");
    }
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use industrial_intelligence::i18n::t;
/// let msg = t("metric.avg_temp");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use industrial_intelligence::i18n::t_with_args;
/// let msg = t_with_args("import.file_not_found", &[("path", "/tmp/sites.json")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

/// 机器状态显示文本
pub fn status_label(status: &MachineStatus) -> String {
    match status {
        // 未知状态显示原始字符串
        MachineStatus::Unknown(raw) => raw.clone(),
        _ => t(status.label_key()),
    }
}

/// 严重等级显示文本
pub fn severity_label(severity: SeverityTier) -> String {
    t(severity.label_key())
}
