// ==========================================
// 工业站点智能看板 - 聚合引擎
// ==========================================
// 职责: 计算站点/部门派生统计
// - 状态计数、平均指标
// - 故障清单（严重等级 + 排序）
// - 团队名册（按 email 去重）
// - 双站点对比报告
// - 概览切片、站点摘要、筛选选项
// ==========================================
// 红线: 只读数据集，空集合平均值返回 None（不可计算）
// ==========================================

use crate::domain::{Dataset, Machine, MachineStatus, SeverityTier, Site, TeamMember};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

// ==========================================
// 输出结构
// ==========================================

/// 状态计数（未识别状态不计入任何桶）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    pub online: usize,
    pub offline: usize,
    pub maintenance: usize,
    pub error: usize,
}

impl StatusCounts {
    /// 四个桶之和（不含未识别状态）
    pub fn counted_total(&self) -> usize {
        self.online + self.offline + self.maintenance + self.error
    }

    /// 故障数（error + offline）
    pub fn issues(&self) -> usize {
        self.error + self.offline
    }
}

/// 平均指标
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageMetrics {
    pub avg_temp: f64,
    pub avg_energy: f64,
    pub avg_uptime: f64,
}

/// 故障清单条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMachine {
    pub machine: Machine,
    pub severity: SeverityTier,
    pub site_id: String,
    pub site_name: String,
    pub site_location: String,
    pub department_id: String,
    pub department_name: String,
}

/// 故障等级统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaultSummary {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

/// 团队名册条目（附所属部门）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(flatten)]
    pub member: TeamMember,
    pub department: String,
}

/// 一对数值（站点A / 站点B）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricPair<T> {
    pub site_a: T,
    pub site_b: T,
}

impl<T> MetricPair<T> {
    fn of<S>(a: S, b: S, f: impl Fn(S) -> T) -> Self {
        Self {
            site_a: f(a),
            site_b: f(b),
        }
    }
}

/// 双站点对比报告
///
/// 每个指标一个字段，避免按运行时字符串键取值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub site_a_id: String,
    pub site_a_name: String,
    pub site_b_id: String,
    pub site_b_name: String,
    pub online: MetricPair<usize>,
    pub offline: MetricPair<usize>,
    pub maintenance: MetricPair<usize>,
    pub error: MetricPair<usize>,
    pub departments: MetricPair<usize>,
    pub total_machines: MetricPair<usize>,
    pub team_members: MetricPair<usize>,
    /// None 表示该站点无机器，平均值不可计算
    pub averages: MetricPair<Option<AverageMetrics>>,
}

/// 概览饼图切片
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSlice {
    pub site_id: String,
    pub site_name: String,
    pub location: String,
    /// 切片值: 部门数
    pub department_count: usize,
    pub machine_count: usize,
}

/// 站点详情摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSummary {
    pub site_id: String,
    pub department_count: usize,
    pub total_machines: usize,
    pub online_machines: usize,
    pub issues: usize,
    pub unique_team_members: usize,
}

/// 筛选面板可选项
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub department_types: Vec<String>,
    pub machine_statuses: Vec<MachineStatus>,
    pub machine_types: Vec<String>,
}

// ==========================================
// AggregationEngine - 聚合引擎
// ==========================================
pub struct AggregationEngine {
    // 无状态引擎，不需要注入依赖
}

impl AggregationEngine {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 基础统计
    // ==========================================

    /// 状态计数
    pub fn status_counts<'a, I>(&self, machines: I) -> StatusCounts
    where
        I: IntoIterator<Item = &'a Machine>,
    {
        let mut counts = StatusCounts::default();
        for machine in machines {
            match machine.status {
                MachineStatus::Online => counts.online += 1,
                MachineStatus::Offline => counts.offline += 1,
                MachineStatus::Maintenance => counts.maintenance += 1,
                MachineStatus::Error => counts.error += 1,
                MachineStatus::Operational | MachineStatus::Unknown(_) => {}
            }
        }
        counts
    }

    /// 平均指标
    ///
    /// # 返回
    /// - Some(AverageMetrics): 算术平均
    /// - None: 空列表，不可计算
    pub fn average_metrics<'a, I>(&self, machines: I) -> Option<AverageMetrics>
    where
        I: IntoIterator<Item = &'a Machine>,
    {
        let mut count = 0usize;
        let (mut temp, mut energy, mut uptime) = (0.0_f64, 0.0_f64, 0.0_f64);
        for machine in machines {
            count += 1;
            temp += machine.temperature;
            energy += machine.energy_consumption_kwh;
            uptime += machine.uptime_hours;
        }

        if count == 0 {
            return None;
        }

        let n = count as f64;
        Some(AverageMetrics {
            avg_temp: temp / n,
            avg_energy: energy / n,
            avg_uptime: uptime / n,
        })
    }

    // ==========================================
    // 故障清单
    // ==========================================

    /// 机器严重等级
    ///
    /// critical: status == error
    /// high: status == offline
    /// medium: 带非空错误描述
    /// low: 其他（故障清单规则下不会出现）
    pub fn classify_severity(&self, machine: &Machine) -> SeverityTier {
        match machine.status {
            MachineStatus::Error => SeverityTier::Critical,
            MachineStatus::Offline => SeverityTier::High,
            _ if machine.has_error_text() => SeverityTier::Medium,
            _ => SeverityTier::Low,
        }
    }

    /// 是否进入故障清单
    pub fn is_faulted(&self, machine: &Machine) -> bool {
        matches!(machine.status, MachineStatus::Error | MachineStatus::Offline)
            || machine.has_error_text()
    }

    /// 全数据集故障清单
    ///
    /// 排序:
    /// 1) critical 优先
    /// 2) last_maintenance 降序（最近维护优先）
    /// 3) 日期无法解析者排最后，其余保持遍历顺序
    pub fn fault_list(&self, dataset: &Dataset) -> Vec<RankedMachine> {
        let mut faults: Vec<RankedMachine> = Vec::new();

        for site in &dataset.sites {
            for dept in &site.departments {
                for machine in dept.machines.iter().filter(|m| self.is_faulted(m)) {
                    faults.push(RankedMachine {
                        machine: machine.clone(),
                        severity: self.classify_severity(machine),
                        site_id: site.site_id.clone(),
                        site_name: site.site_name.clone(),
                        site_location: site.location.clone(),
                        department_id: dept.department_id.clone(),
                        department_name: dept.department_name.clone(),
                    });
                }
            }
        }

        faults.sort_by(|a, b| self.compare_faults(a, b));

        tracing::debug!(count = faults.len(), "故障清单生成完成");
        faults
    }

    fn compare_faults(&self, a: &RankedMachine, b: &RankedMachine) -> Ordering {
        let a_critical = a.severity == SeverityTier::Critical;
        let b_critical = b.severity == SeverityTier::Critical;
        match (a_critical, b_critical) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        match (a.machine.maintenance_date(), b.machine.maintenance_date()) {
            (Some(da), Some(db)) => db.cmp(&da),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// 故障等级统计
    pub fn fault_summary(&self, faults: &[RankedMachine]) -> FaultSummary {
        let mut summary = FaultSummary {
            total: faults.len(),
            ..FaultSummary::default()
        };
        for fault in faults {
            match fault.severity {
                SeverityTier::Critical => summary.critical += 1,
                SeverityTier::High => summary.high += 1,
                SeverityTier::Medium => summary.medium += 1,
                SeverityTier::Low => summary.low += 1,
            }
        }
        summary
    }

    // ==========================================
    // 团队名册
    // ==========================================

    /// 站点团队名册（按 email 去重，首次出现者保留）
    pub fn team_roster(&self, site: &Site) -> Vec<RosterEntry> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut roster = Vec::new();

        for dept in &site.departments {
            for member in &dept.team {
                if seen.insert(member.email.as_str()) {
                    roster.push(RosterEntry {
                        member: member.clone(),
                        department: dept.department_name.clone(),
                    });
                }
            }
        }

        roster
    }

    // ==========================================
    // 站点对比
    // ==========================================

    /// 双站点对比
    pub fn compare_sites(&self, site_a: &Site, site_b: &Site) -> ComparisonReport {
        let counts_a = self.status_counts(site_a.machines());
        let counts_b = self.status_counts(site_b.machines());

        ComparisonReport {
            site_a_id: site_a.site_id.clone(),
            site_a_name: site_a.site_name.clone(),
            site_b_id: site_b.site_id.clone(),
            site_b_name: site_b.site_name.clone(),
            online: MetricPair::of(&counts_a, &counts_b, |c| c.online),
            offline: MetricPair::of(&counts_a, &counts_b, |c| c.offline),
            maintenance: MetricPair::of(&counts_a, &counts_b, |c| c.maintenance),
            error: MetricPair::of(&counts_a, &counts_b, |c| c.error),
            departments: MetricPair::of(site_a, site_b, |s| s.departments.len()),
            total_machines: MetricPair::of(site_a, site_b, Site::machine_count),
            team_members: MetricPair::of(site_a, site_b, Site::team_size),
            averages: MetricPair::of(site_a, site_b, |s| self.average_metrics(s.machines())),
        }
    }

    /// 按选择列表对比
    ///
    /// # 返回
    /// - Some(ComparisonReport): 恰好选择了两个站点
    /// - None: 对比不可用（少于或多于两个）
    pub fn compare_selection(&self, sites: &[&Site]) -> Option<ComparisonReport> {
        match sites {
            [a, b] => Some(self.compare_sites(a, b)),
            _ => {
                tracing::debug!(selected = sites.len(), "对比需要恰好两个站点");
                None
            }
        }
    }

    // ==========================================
    // 概览与摘要
    // ==========================================

    /// 概览饼图切片
    pub fn site_overview(&self, sites: &[Site]) -> Vec<SiteSlice> {
        sites
            .iter()
            .map(|site| SiteSlice {
                site_id: site.site_id.clone(),
                site_name: site.site_name.clone(),
                location: site.location.clone(),
                department_count: site.departments.len(),
                machine_count: site.machine_count(),
            })
            .collect()
    }

    /// 站点详情摘要
    pub fn site_summary(&self, site: &Site) -> SiteSummary {
        let counts = self.status_counts(site.machines());
        SiteSummary {
            site_id: site.site_id.clone(),
            department_count: site.departments.len(),
            total_machines: site.machine_count(),
            online_machines: counts.online,
            issues: counts.issues(),
            unique_team_members: self.team_roster(site).len(),
        }
    }

    /// 筛选面板可选项（按首次出现顺序去重）
    pub fn filter_options(&self, dataset: &Dataset) -> FilterOptions {
        let mut options = FilterOptions {
            machine_statuses: MachineStatus::COUNTED.to_vec(),
            ..FilterOptions::default()
        };

        for site in &dataset.sites {
            push_unique(&mut options.locations, &site.location);
            for dept in &site.departments {
                push_unique(&mut options.department_types, &dept.department_name);
                for machine in &dept.machines {
                    push_unique(&mut options.machine_types, &machine.machine_type);
                }
            }
        }

        options
    }
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}
