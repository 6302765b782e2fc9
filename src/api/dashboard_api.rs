// ==========================================
// 工业站点智能看板 - 看板 API
// ==========================================
// 职责: 对外提供站点/部门/机器查询、故障清单、站点对比与导出
// 架构: API 层 → Engine 层 (Filter / Sort / Aggregation) → 只读 Dataset
// ==========================================

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{Dataset, Department, Machine, Site};
use crate::engine::{
    AggregationEngine, ComparisonReport, DepartmentSort, FaultSummary, FilterCriteria,
    FilterEngine, FilterOptions, MachineSort, RankedMachine, RosterEntry, SiteSlice, SiteSummary,
    SortEngine, StatusCounts, TeamSort,
};
use crate::export::{write_export, ExportFormat};

// ==========================================
// DashboardApi - 看板 API
// ==========================================

/// 看板API
///
/// 持有共享的只读数据集，所有查询返回新集合
pub struct DashboardApi {
    dataset: Arc<Dataset>,
    filter_engine: FilterEngine,
    sort_engine: SortEngine,
    aggregation_engine: AggregationEngine,
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            filter_engine: FilterEngine::new(),
            sort_engine: SortEngine::new(),
            aggregation_engine: AggregationEngine::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    // ==========================================
    // 站点查询
    // ==========================================

    /// 查询站点列表（站点层筛选）
    pub fn list_sites(&self, criteria: &FilterCriteria) -> Vec<Site> {
        self.filter_engine
            .filter_dataset_sites(&self.dataset, criteria)
    }

    /// 概览饼图切片（站点层筛选后）
    pub fn get_site_overview(&self, criteria: &FilterCriteria) -> Vec<SiteSlice> {
        let sites = self.list_sites(criteria);
        self.aggregation_engine.site_overview(&sites)
    }

    /// 查询单个站点
    ///
    /// # 返回
    /// - Ok(&Site): 站点
    /// - Err(ApiError::InvalidInput): site_id 为空
    /// - Err(ApiError::NotFound): 站点不存在
    pub fn get_site(&self, site_id: &str) -> ApiResult<&Site> {
        if site_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("站点ID不能为空".to_string()));
        }

        self.dataset
            .find_site(site_id)
            .ok_or_else(|| ApiError::NotFound(format!("站点(id={})不存在", site_id)))
    }

    /// 站点详情摘要
    pub fn get_site_summary(&self, site_id: &str) -> ApiResult<SiteSummary> {
        let site = self.get_site(site_id)?;
        Ok(self.aggregation_engine.site_summary(site))
    }

    /// 站点团队名册（去重 + 排序）
    pub fn get_team_roster(&self, site_id: &str, sort: &TeamSort) -> ApiResult<Vec<RosterEntry>> {
        let site = self.get_site(site_id)?;
        let roster = self.aggregation_engine.team_roster(site);
        Ok(self.sort_engine.sort_roster(&roster, sort))
    }

    // ==========================================
    // 部门 / 机器查询
    // ==========================================

    /// 查询站点下的部门（部门层筛选 + 排序）
    pub fn list_departments(
        &self,
        site_id: &str,
        criteria: &FilterCriteria,
        sort: &DepartmentSort,
    ) -> ApiResult<Vec<Department>> {
        let site = self.get_site(site_id)?;
        let departments = self
            .filter_engine
            .filter_departments(&site.departments, criteria);
        Ok(self.sort_engine.sort_departments(&departments, sort))
    }

    /// 查询部门下的机器（机器层筛选 + 排序）
    pub fn list_machines(
        &self,
        site_id: &str,
        department_id: &str,
        criteria: &FilterCriteria,
        sort: &MachineSort,
    ) -> ApiResult<Vec<Machine>> {
        let dept = self.get_department(site_id, department_id)?;
        let machines = self.filter_engine.filter_machines(&dept.machines, criteria);
        Ok(self.sort_engine.sort_machines(&machines, sort))
    }

    /// 部门状态计数
    pub fn get_department_status(
        &self,
        site_id: &str,
        department_id: &str,
    ) -> ApiResult<StatusCounts> {
        let dept = self.get_department(site_id, department_id)?;
        Ok(self.aggregation_engine.status_counts(&dept.machines))
    }

    fn get_department(&self, site_id: &str, department_id: &str) -> ApiResult<&Department> {
        let site = self.get_site(site_id)?;
        site.departments
            .iter()
            .find(|d| d.department_id == department_id)
            .ok_or_else(|| {
                ApiError::NotFound(format!(
                    "部门(site_id={}, department_id={})不存在",
                    site_id, department_id
                ))
            })
    }

    // ==========================================
    // 故障清单
    // ==========================================

    /// 故障清单
    ///
    /// # 参数
    /// - limit: 最多返回条数，None 表示全部
    pub fn get_fault_list(&self, limit: Option<usize>) -> Vec<RankedMachine> {
        let mut faults = self.aggregation_engine.fault_list(&self.dataset);
        if let Some(limit) = limit {
            faults.truncate(limit);
        }
        faults
    }

    /// 故障等级统计（全量）
    pub fn get_fault_summary(&self) -> FaultSummary {
        let faults = self.aggregation_engine.fault_list(&self.dataset);
        self.aggregation_engine.fault_summary(&faults)
    }

    // ==========================================
    // 站点对比
    // ==========================================

    /// 站点对比
    ///
    /// # 返回
    /// - Ok(ComparisonReport): 恰好两个站点
    /// - Err(ApiError::ComparisonUnavailable): 站点数量不是 2
    /// - Err(ApiError::NotFound): 任一站点不存在
    pub fn compare_sites(&self, site_ids: &[String]) -> ApiResult<ComparisonReport> {
        let sites = site_ids
            .iter()
            .map(|id| self.get_site(id))
            .collect::<ApiResult<Vec<&Site>>>()?;

        self.aggregation_engine
            .compare_selection(&sites)
            .ok_or(ApiError::ComparisonUnavailable {
                selected: sites.len(),
            })
    }

    // ==========================================
    // 筛选面板 / 导出
    // ==========================================

    pub fn get_filter_options(&self) -> FilterOptions {
        self.aggregation_engine.filter_options(&self.dataset)
    }

    /// 导出全量数据集为字符串（不受筛选影响）
    pub fn export_to_string(&self, format: &str) -> ApiResult<String> {
        let format = ExportFormat::parse(format)?;
        Ok(format.encode(&self.dataset)?)
    }

    /// 导出全量数据集到目录
    pub fn export_to_dir(&self, format: &str, dir: &Path) -> ApiResult<PathBuf> {
        let format = ExportFormat::parse(format)?;
        Ok(write_export(&self.dataset, format, dir)?)
    }
}
