// ==========================================
// 工业站点智能看板 - 配置层
// ==========================================
// 职责: 看板配置加载，支持文件与环境变量覆写
// 存储: <config_dir>/industrial-intelligence/config.json
// ==========================================

pub mod dashboard_config;

// 重导出核心配置
pub use dashboard_config::{
    config_keys, default_config_path, default_dataset_path, ConfigError, ConfigResult,
    DashboardConfig,
};
