// ==========================================
// 工业站点智能看板 - API 层
// ==========================================
// 职责: 提供看板查询接口，供 CLI 与应用层调用
// ==========================================

pub mod dashboard_api;
pub mod error;

// 重导出核心类型
pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};
