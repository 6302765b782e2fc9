// ==========================================
// 工业站点智能看板 - 筛选引擎
// ==========================================
// 职责: 按筛选条件生成站点/部门/机器子集
// 输入: 数据集(或子列表) + FilterCriteria
// 输出: 新的列表（克隆），不修改输入
// ==========================================
// 组合规则:
// - 各字段之间为 AND
// - 站点层只校验 site_location + search_query
// - 部门层: department_type + "至少一台机器同时满足全部机器条件"
// - 机器层: 机器条件 + search_query (machine_id / type)
// - 站点层与部门层分别在不同视图层级生效，不做跨层组合
// ==========================================

use crate::domain::{Dataset, Department, Machine, MachineStatus, Site};
use serde::{Deserialize, Serialize};

// ==========================================
// FilterCriteria - 筛选条件
// ==========================================
// 所有字段可选；None 或空字符串 = 不约束
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// 站点位置（不区分大小写的子串匹配）
    pub site_location: Option<String>,
    /// 部门名称（精确匹配）
    pub department_type: Option<String>,
    /// 机器状态（精确匹配）
    pub machine_status: Option<MachineStatus>,
    /// 机器类型（精确匹配）
    pub machine_type: Option<String>,
    /// 温度阈值: temperature > 阈值 才保留
    pub temperature_threshold: Option<f64>,
    /// 运行时长阈值: uptime_hours >= 阈值 才保留
    pub uptime_threshold: Option<f64>,
    /// 自由文本搜索（不区分大小写，按字面子串）
    pub search_query: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_site_location(mut self, location: impl Into<String>) -> Self {
        self.site_location = Some(location.into());
        self
    }

    pub fn with_department_type(mut self, name: impl Into<String>) -> Self {
        self.department_type = Some(name.into());
        self
    }

    pub fn with_machine_status(mut self, status: MachineStatus) -> Self {
        self.machine_status = Some(status);
        self
    }

    pub fn with_machine_type(mut self, machine_type: impl Into<String>) -> Self {
        self.machine_type = Some(machine_type.into());
        self
    }

    pub fn with_temperature_threshold(mut self, threshold: f64) -> Self {
        self.temperature_threshold = Some(threshold);
        self
    }

    pub fn with_uptime_threshold(mut self, threshold: f64) -> Self {
        self.uptime_threshold = Some(threshold);
        self
    }

    pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    /// 是否没有任何生效条件
    pub fn is_empty(&self) -> bool {
        active_text(&self.site_location).is_none()
            && active_text(&self.department_type).is_none()
            && active_text(&self.search_query).is_none()
            && !self.has_machine_criteria()
    }

    /// 是否存在机器层条件（状态/类型/温度/运行时长）
    pub fn has_machine_criteria(&self) -> bool {
        self.active_status().is_some()
            || active_text(&self.machine_type).is_some()
            || self.temperature_threshold.is_some()
            || self.uptime_threshold.is_some()
    }

    /// 清空筛选条件，保留搜索文本
    pub fn cleared_keep_search(&self) -> Self {
        Self {
            search_query: self.search_query.clone(),
            ..Self::default()
        }
    }

    fn active_status(&self) -> Option<&MachineStatus> {
        self.machine_status
            .as_ref()
            .filter(|s| !s.as_str().is_empty())
    }

    fn normalized_query(&self) -> Option<String> {
        active_text(&self.search_query).map(str::to_lowercase)
    }
}

/// 取出非空文本条件
fn active_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// 不区分大小写的字面子串匹配（needle 需已转小写）
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

// ==========================================
// FilterEngine - 筛选引擎
// ==========================================
pub struct FilterEngine {
    // 无状态引擎，不需要注入依赖
}

impl FilterEngine {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 站点层
    // ==========================================

    /// 筛选数据集中的站点
    pub fn filter_dataset_sites(&self, dataset: &Dataset, criteria: &FilterCriteria) -> Vec<Site> {
        self.filter_sites(&dataset.sites, criteria)
    }

    /// 筛选站点列表
    ///
    /// 站点通过条件:
    /// 1. location 包含 site_location（不区分大小写）
    /// 2. 站点名 / 任一部门名或负责人 / 任一机器编号 包含 search_query
    ///
    /// 机器层条件不影响站点列表
    pub fn filter_sites(&self, sites: &[Site], criteria: &FilterCriteria) -> Vec<Site> {
        let result: Vec<Site> = sites
            .iter()
            .filter(|site| self.site_matches(site, criteria))
            .cloned()
            .collect();

        tracing::debug!(
            input = sites.len(),
            output = result.len(),
            "站点筛选完成"
        );
        result
    }

    /// 判断单个站点是否通过站点层条件
    pub fn site_matches(&self, site: &Site, criteria: &FilterCriteria) -> bool {
        if let Some(location) = active_text(&criteria.site_location) {
            if !contains_ci(&site.location, &location.to_lowercase()) {
                return false;
            }
        }

        if let Some(query) = criteria.normalized_query() {
            let site_match = contains_ci(&site.site_name, &query);
            let department_match = site.departments.iter().any(|dept| {
                contains_ci(&dept.department_name, &query) || contains_ci(&dept.head, &query)
            });
            let machine_match = site.machines().any(|m| contains_ci(&m.machine_id, &query));

            if !site_match && !department_match && !machine_match {
                return false;
            }
        }

        true
    }

    // ==========================================
    // 部门层
    // ==========================================

    /// 筛选部门列表
    ///
    /// 部门保留原有全部机器，只决定部门本身是否出现
    pub fn filter_departments(
        &self,
        departments: &[Department],
        criteria: &FilterCriteria,
    ) -> Vec<Department> {
        departments
            .iter()
            .filter(|dept| self.department_matches(dept, criteria))
            .cloned()
            .collect()
    }

    /// 判断单个部门是否通过部门层条件
    pub fn department_matches(&self, dept: &Department, criteria: &FilterCriteria) -> bool {
        if let Some(name) = active_text(&criteria.department_type) {
            if dept.department_name != name {
                return false;
            }
        }

        // 机器条件生效时，必须存在一台机器同时满足全部条件
        if criteria.has_machine_criteria() {
            return dept
                .machines
                .iter()
                .any(|m| self.machine_passes_attributes(m, criteria));
        }

        true
    }

    // ==========================================
    // 机器层
    // ==========================================

    /// 筛选机器列表（详情视图）
    pub fn filter_machines(&self, machines: &[Machine], criteria: &FilterCriteria) -> Vec<Machine> {
        machines
            .iter()
            .filter(|m| self.machine_matches(m, criteria))
            .cloned()
            .collect()
    }

    /// 判断单台机器是否通过机器层条件（含搜索）
    pub fn machine_matches(&self, machine: &Machine, criteria: &FilterCriteria) -> bool {
        if !self.machine_passes_attributes(machine, criteria) {
            return false;
        }

        if let Some(query) = criteria.normalized_query() {
            if !contains_ci(&machine.machine_id, &query)
                && !contains_ci(&machine.machine_type, &query)
            {
                return false;
            }
        }

        true
    }

    /// 机器属性条件（不含搜索）
    fn machine_passes_attributes(&self, machine: &Machine, criteria: &FilterCriteria) -> bool {
        if let Some(status) = criteria.active_status() {
            if &machine.status != status {
                return false;
            }
        }

        if let Some(machine_type) = active_text(&criteria.machine_type) {
            if machine.machine_type != machine_type {
                return false;
            }
        }

        if let Some(threshold) = criteria.temperature_threshold {
            if machine.temperature <= threshold {
                return false;
            }
        }

        if let Some(threshold) = criteria.uptime_threshold {
            if machine.uptime_hours < threshold {
                return false;
            }
        }

        true
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}
