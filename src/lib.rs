// ==========================================
// 工业站点智能看板 - 核心库
// ==========================================
// 数据: 站点 → 部门 → (团队成员，机器) 只读层级数据集
// 引擎: 筛选 / 排序 / 聚合 / 导出
// 系统定位: 看板数据引擎（展示层之外的全部规则）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 筛选/排序/聚合
pub mod engine;

// 导出层 - JSON/CSV
pub mod export;

// 导入层 - 数据集加载
pub mod importer;

// 配置层 - 看板配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 看板接口
pub mod api;

// 应用层 - 会话状态与派生视图
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{MachineStatus, SeverityTier, SortDirection};

// 领域实体
pub use domain::{Dataset, Department, Machine, Site, TeamMember};

// 引擎
pub use engine::{AggregationEngine, FilterCriteria, FilterEngine, SortEngine, SortSpec};

// API
pub use api::{ApiError, ApiResult, DashboardApi};

// 应用
pub use app::{derive_views, AppState, DashboardView, SessionState};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "工业站点智能看板";
