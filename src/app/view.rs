// ==========================================
// 工业站点智能看板 - 派生视图
// ==========================================
// 职责: 由 (数据集，会话状态) 计算全部展示数据
// 流程: 筛选 → 排序 → 聚合
// 红线: 纯函数，不修改数据集与会话
// ==========================================

use serde::Serialize;

use crate::app::state::SessionState;
use crate::config::DashboardConfig;
use crate::domain::{Dataset, Department, Machine, Site};
use crate::engine::{
    AggregationEngine, AverageMetrics, ComparisonReport, FaultSummary, FilterEngine,
    RankedMachine, RosterEntry, SiteSlice, SiteSummary, SortEngine, StatusCounts,
};

// ==========================================
// 视图结构
// ==========================================

/// 看板整体视图
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// 概览饼图（仅筛选后的站点）
    pub overview: Vec<SiteSlice>,
    /// 站点层无匹配
    pub no_site_matches: bool,
    /// 选中站点的详情
    pub site_detail: Option<SiteDetailView>,
    /// 对比报告（恰好选择两个站点时存在）
    pub comparison: Option<ComparisonReport>,
    /// 故障清单（已按配置截断）
    pub faults: Vec<RankedMachine>,
    /// 故障等级统计（截断前）
    pub fault_summary: FaultSummary,
}

/// 站点详情视图
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteDetailView {
    pub site_id: String,
    pub site_name: String,
    pub location: String,
    pub summary: SiteSummary,
    pub roster: Vec<RosterEntry>,
    pub departments: Vec<DepartmentView>,
    /// 部门层无匹配
    pub no_department_matches: bool,
}

/// 部门视图
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentView {
    pub department_id: String,
    pub department_name: String,
    pub head: String,
    pub selected: bool,
    /// 筛选 + 排序后的机器
    pub machines: Vec<Machine>,
    /// 部门全部机器的状态计数
    pub status_counts: StatusCounts,
    pub averages: Option<AverageMetrics>,
    /// 机器层无匹配
    pub no_machine_matches: bool,
}

// ==========================================
// derive_views
// ==========================================

/// 计算派生视图
pub fn derive_views(
    dataset: &Dataset,
    session: &SessionState,
    config: &DashboardConfig,
) -> DashboardView {
    let filter_engine = FilterEngine::new();
    let aggregation_engine = AggregationEngine::new();

    let visible_sites = filter_engine.filter_dataset_sites(dataset, &session.filters);
    let overview = aggregation_engine.site_overview(&visible_sites);

    let site_detail = session.selected_site_id.as_deref().and_then(|site_id| {
        let site = dataset.find_site(site_id);
        if site.is_none() {
            tracing::warn!(site_id, "选中站点不存在");
        }
        site.map(|s| site_detail_view(s, session))
    });

    let comparison = comparison_view(dataset, session, &aggregation_engine);

    let mut faults = aggregation_engine.fault_list(dataset);
    let fault_summary = aggregation_engine.fault_summary(&faults);
    if config.fault_list_limit > 0 {
        faults.truncate(config.fault_list_limit);
    }

    DashboardView {
        no_site_matches: overview.is_empty(),
        overview,
        site_detail,
        comparison,
        faults,
        fault_summary,
    }
}

fn site_detail_view(site: &Site, session: &SessionState) -> SiteDetailView {
    let filter_engine = FilterEngine::new();
    let sort_engine = SortEngine::new();
    let aggregation_engine = AggregationEngine::new();

    let roster = aggregation_engine.team_roster(site);
    let roster = sort_engine.sort_roster(&roster, &session.team_sort);

    let departments = filter_engine.filter_departments(&site.departments, &session.filters);
    let departments = sort_engine.sort_departments(&departments, &session.department_sort);

    let departments: Vec<DepartmentView> = departments
        .iter()
        .map(|dept| department_view(dept, session, &filter_engine, &sort_engine))
        .collect();

    SiteDetailView {
        site_id: site.site_id.clone(),
        site_name: site.site_name.clone(),
        location: site.location.clone(),
        summary: aggregation_engine.site_summary(site),
        roster,
        no_department_matches: departments.is_empty(),
        departments,
    }
}

fn department_view(
    dept: &Department,
    session: &SessionState,
    filter_engine: &FilterEngine,
    sort_engine: &SortEngine,
) -> DepartmentView {
    let aggregation_engine = AggregationEngine::new();

    let machines = filter_engine.filter_machines(&dept.machines, &session.filters);
    let machines = sort_engine.sort_machines(&machines, &session.machine_sort);

    DepartmentView {
        department_id: dept.department_id.clone(),
        department_name: dept.department_name.clone(),
        head: dept.head.clone(),
        selected: session.selected_department_id.as_deref() == Some(dept.department_id.as_str()),
        status_counts: aggregation_engine.status_counts(&dept.machines),
        averages: aggregation_engine.average_metrics(&dept.machines),
        no_machine_matches: machines.is_empty(),
        machines,
    }
}

fn comparison_view(
    dataset: &Dataset,
    session: &SessionState,
    aggregation_engine: &AggregationEngine,
) -> Option<ComparisonReport> {
    let selected: Vec<&Site> = session
        .comparison_selection
        .iter()
        .filter_map(|id| dataset.find_site(id))
        .collect();
    aggregation_engine.compare_selection(&selected)
}
