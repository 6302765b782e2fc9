// ==========================================
// 工业站点智能看板 - 应用层
// ==========================================
// 职责: 会话状态容器与派生视图管线
// ==========================================

pub mod state;
pub mod view;

// 重导出
pub use state::{AppState, SessionState, MAX_COMPARISON_SITES};
pub use view::{derive_views, DashboardView, DepartmentView, SiteDetailView};
