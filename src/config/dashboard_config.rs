// ==========================================
// 工业站点智能看板 - 看板配置
// ==========================================
// 职责: 数据集路径、导出目录、故障清单条数、语言、默认排序
// 覆写顺序: 默认值 → 配置文件(JSON) → 环境变量
// ==========================================

use crate::engine::sort::{
    DepartmentSort, DepartmentSortField, MachineSort, MachineSortField, SortSpec, TeamSort,
    TeamSortField,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ==========================================
// 配置键常量（环境变量）
// ==========================================
pub mod config_keys {
    // 数据集
    pub const DATASET_PATH: &str = "INDUSTRIAL_INTELLIGENCE_DATASET";

    // 导出
    pub const EXPORT_DIR: &str = "INDUSTRIAL_INTELLIGENCE_EXPORT_DIR";

    // 界面
    pub const LOCALE: &str = "INDUSTRIAL_INTELLIGENCE_LOCALE";
    pub const FAULT_LIST_LIMIT: &str = "INDUSTRIAL_INTELLIGENCE_FAULT_LIMIT";

    // 配置文件
    pub const CONFIG_FILE: &str = "INDUSTRIAL_INTELLIGENCE_CONFIG";
}

/// 配置目录名
pub const CONFIG_DIR_NAME: &str = "industrial-intelligence";

/// 数据集文件名
pub const DATASET_FILE_NAME: &str = "industrial_sites.json";

/// 默认故障清单展示条数
pub const DEFAULT_FAULT_LIST_LIMIT: usize = 20;

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置文件解析失败 ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value})")]
    ValueError { key: String, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// DashboardConfig - 看板配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// 打包数据集路径
    pub dataset_path: PathBuf,
    /// 导出目录
    pub export_dir: PathBuf,
    /// 故障清单展示条数（0 表示不限制）
    pub fault_list_limit: usize,
    /// 界面语言（zh-CN / en）
    pub locale: String,
    /// 默认部门排序
    pub default_department_sort: DepartmentSort,
    /// 默认机器排序
    pub default_machine_sort: MachineSort,
    /// 默认团队排序
    pub default_team_sort: TeamSort,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            export_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
            fault_list_limit: DEFAULT_FAULT_LIST_LIMIT,
            locale: "zh-CN".to_string(),
            default_department_sort: SortSpec::asc(DepartmentSortField::Name),
            default_machine_sort: SortSpec::asc(MachineSortField::Uptime),
            default_team_sort: SortSpec::asc(TeamSortField::Name),
        }
    }
}

impl DashboardConfig {
    /// 加载配置（默认位置 + 环境变量）
    pub fn load() -> ConfigResult<Self> {
        let path = std::env::var(config_keys::CONFIG_FILE)
            .ok()
            .map(PathBuf::from)
            .or_else(default_config_path);

        let mut config = match path {
            Some(p) if p.exists() => Self::from_file(&p)?,
            _ => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;

        tracing::debug!(?config, "看板配置加载完成");
        Ok(config)
    }

    /// 从 JSON 文件读取配置，缺省字段使用默认值
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// 应用覆写值
    ///
    /// # 参数
    /// - lookup: 按键取值（生产环境为环境变量）
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(path) = non_empty(config_keys::DATASET_PATH) {
            self.dataset_path = PathBuf::from(path);
        }
        if let Some(dir) = non_empty(config_keys::EXPORT_DIR) {
            self.export_dir = PathBuf::from(dir);
        }
        if let Some(locale) = non_empty(config_keys::LOCALE) {
            self.locale = locale;
        }
        if let Some(limit) = non_empty(config_keys::FAULT_LIST_LIMIT) {
            self.fault_list_limit = limit.parse().map_err(|_| ConfigError::ValueError {
                key: config_keys::FAULT_LIST_LIMIT.to_string(),
                value: limit.clone(),
            })?;
        }
        Ok(())
    }
}

/// 默认数据集路径
///
/// 优先级: 用户数据目录下已安装的数据集 → 工作目录下 data/
/// 环境变量覆写统一在 `apply_overrides` 中处理
pub fn default_dataset_path() -> PathBuf {
    default_dataset_path_in(dirs::data_dir().as_deref())
}

/// 在给定数据目录下查找数据集，不存在时回退到 data/
pub fn default_dataset_path_in(data_dir: Option<&Path>) -> PathBuf {
    data_dir
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(DATASET_FILE_NAME))
        .filter(|candidate| candidate.exists())
        .unwrap_or_else(|| Path::new("data").join(DATASET_FILE_NAME))
}

/// 默认配置文件路径: <config_dir>/industrial-intelligence/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.json"))
}
