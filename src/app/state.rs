// ==========================================
// 工业站点智能看板 - 应用状态
// ==========================================
// 职责: 会话状态容器（筛选条件/排序/选择）与共享数据集
// 红线: 状态显式传递，不使用全局可变状态
// ==========================================

use std::sync::Arc;

use crate::api::DashboardApi;
use crate::config::DashboardConfig;
use crate::domain::Dataset;
use crate::engine::{
    DepartmentSort, DepartmentSortField, FilterCriteria, MachineSort, MachineSortField, TeamSort,
    TeamSortField,
};
use crate::importer::{DatasetLoader, ImportResult};

/// 对比最多可选站点数
pub const MAX_COMPARISON_SITES: usize = 2;

// ==========================================
// SessionState - 会话状态
// ==========================================

/// 会话状态
///
/// 保存当前筛选条件、排序方式和选择项；
/// 所有派生视图由 `app::view::derive_views` 根据该状态重新计算
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub filters: FilterCriteria,
    pub department_sort: DepartmentSort,
    pub machine_sort: MachineSort,
    pub team_sort: TeamSort,
    pub selected_site_id: Option<String>,
    pub selected_department_id: Option<String>,
    /// 对比选择（按选择顺序，最多 2 个）
    pub comparison_selection: Vec<String>,
}

impl SessionState {
    /// 按配置的默认排序创建会话
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            department_sort: config.default_department_sort,
            machine_sort: config.default_machine_sort,
            team_sort: config.default_team_sort,
            ..Self::default()
        }
    }

    // ==========================================
    // 筛选
    // ==========================================

    pub fn set_filters(&mut self, filters: FilterCriteria) {
        self.filters = filters;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.filters.search_query = if query.is_empty() { None } else { Some(query) };
    }

    /// 清空筛选条件（保留搜索文本）
    pub fn clear_filters(&mut self) {
        self.filters = self.filters.cleared_keep_search();
    }

    // ==========================================
    // 选择
    // ==========================================

    /// 选择站点，再次选择同一站点则取消
    ///
    /// 切换站点时清空部门选择
    pub fn select_site(&mut self, site_id: &str) {
        if self.selected_site_id.as_deref() == Some(site_id) {
            self.selected_site_id = None;
        } else {
            self.selected_site_id = Some(site_id.to_string());
        }
        self.selected_department_id = None;
    }

    /// 选择部门，再次选择同一部门则取消
    pub fn select_department(&mut self, department_id: &str) {
        if self.selected_department_id.as_deref() == Some(department_id) {
            self.selected_department_id = None;
        } else {
            self.selected_department_id = Some(department_id.to_string());
        }
    }

    /// 重置选择（站点与部门）
    pub fn reset_selection(&mut self) {
        self.selected_site_id = None;
        self.selected_department_id = None;
    }

    /// 切换对比选择
    ///
    /// # 返回
    /// - true: 选择已变更
    /// - false: 已选满 2 个，新站点被忽略
    pub fn toggle_comparison_site(&mut self, site_id: &str) -> bool {
        if let Some(pos) = self.comparison_selection.iter().position(|s| s == site_id) {
            self.comparison_selection.remove(pos);
            return true;
        }

        if self.comparison_selection.len() >= MAX_COMPARISON_SITES {
            tracing::debug!(site_id, "对比已选满，忽略");
            return false;
        }

        self.comparison_selection.push(site_id.to_string());
        true
    }

    // ==========================================
    // 排序（点击排序按钮）
    // ==========================================

    pub fn click_department_sort(&mut self, field: DepartmentSortField) {
        self.department_sort = self.department_sort.clicked(field);
    }

    pub fn click_machine_sort(&mut self, field: MachineSortField) {
        self.machine_sort = self.machine_sort.clicked(field);
    }

    pub fn click_team_sort(&mut self, field: TeamSortField) {
        self.team_sort = self.team_sort.clicked(field);
    }
}

// ==========================================
// AppState - 应用状态
// ==========================================

/// 应用状态
///
/// 组合根持有: 只读数据集 + 会话状态 + 配置 + API
pub struct AppState {
    /// 数据集（启动时加载，只读共享）
    pub dataset: Arc<Dataset>,

    /// 会话状态
    pub session: SessionState,

    /// 看板配置
    pub config: DashboardConfig,

    /// 看板API
    pub dashboard_api: Arc<DashboardApi>,
}

impl AppState {
    /// 由已加载的数据集创建AppState
    pub fn new(dataset: Dataset, config: DashboardConfig) -> Self {
        let dataset = Arc::new(dataset);
        let dashboard_api = Arc::new(DashboardApi::new(Arc::clone(&dataset)));
        let session = SessionState::from_config(&config);

        tracing::info!(
            sites = dataset.sites.len(),
            machines = dataset.machine_count(),
            "AppState 初始化完成"
        );

        Self {
            dataset,
            session,
            config,
            dashboard_api,
        }
    }

    /// 按配置加载数据集并创建AppState
    pub fn load(config: DashboardConfig) -> ImportResult<Self> {
        let dataset = DatasetLoader.load_file(&config.dataset_path)?;
        Ok(Self::new(dataset, config))
    }

    /// 根据当前会话计算派生视图
    pub fn view(&self) -> crate::app::view::DashboardView {
        crate::app::view::derive_views(&self.dataset, &self.session, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MachineStatus, SortDirection};

    #[test]
    fn test_clear_filters_keeps_search() {
        let mut session = SessionState::default();
        session.set_filters(
            FilterCriteria::new()
                .with_site_location("ohio")
                .with_machine_status(MachineStatus::Error),
        );
        session.set_search("press");

        session.clear_filters();
        assert_eq!(session.filters.search_query.as_deref(), Some("press"));
        assert!(session.filters.site_location.is_none());
        assert!(session.filters.machine_status.is_none());
    }

    #[test]
    fn test_empty_search_is_none() {
        let mut session = SessionState::default();
        session.set_search("x");
        session.set_search("");
        assert!(session.filters.search_query.is_none());
    }

    #[test]
    fn test_select_site_toggles_and_clears_department() {
        let mut session = SessionState::default();
        session.select_site("S1");
        session.select_department("D1");
        assert_eq!(session.selected_department_id.as_deref(), Some("D1"));

        session.select_site("S2");
        assert_eq!(session.selected_site_id.as_deref(), Some("S2"));
        assert!(session.selected_department_id.is_none());

        session.select_site("S2");
        assert!(session.selected_site_id.is_none());
    }

    #[test]
    fn test_reset_selection_keeps_search() {
        let mut session = SessionState::default();
        session.set_search("boiler");
        session.select_site("S1");
        session.select_department("D1");

        session.reset_selection();
        assert!(session.selected_site_id.is_none());
        assert!(session.selected_department_id.is_none());
        assert_eq!(session.filters.search_query.as_deref(), Some("boiler"));
    }

    #[test]
    fn test_comparison_selection_capped_at_two() {
        let mut session = SessionState::default();
        assert!(session.toggle_comparison_site("S1"));
        assert!(session.toggle_comparison_site("S2"));
        assert!(!session.toggle_comparison_site("S3"));
        assert_eq!(session.comparison_selection, vec!["S1", "S2"]);

        // 再次选择 = 取消
        assert!(session.toggle_comparison_site("S1"));
        assert!(session.toggle_comparison_site("S3"));
        assert_eq!(session.comparison_selection, vec!["S2", "S3"]);
    }

    #[test]
    fn test_click_sort_toggles_direction() {
        let mut session = SessionState::default();
        assert_eq!(session.machine_sort.direction, SortDirection::Asc);

        session.click_machine_sort(MachineSortField::Energy);
        assert_eq!(session.machine_sort.field, MachineSortField::Energy);
        assert_eq!(session.machine_sort.direction, SortDirection::Desc);

        session.click_machine_sort(MachineSortField::Energy);
        assert_eq!(session.machine_sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_session_from_config() {
        let mut config = DashboardConfig::default();
        config.default_machine_sort = MachineSort::desc(MachineSortField::Maintenance);
        let session = SessionState::from_config(&config);
        assert_eq!(session.machine_sort, MachineSort::desc(MachineSortField::Maintenance));
    }
}
