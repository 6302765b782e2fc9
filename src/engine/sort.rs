// ==========================================
// 工业站点智能看板 - 排序引擎
// ==========================================
// 职责: 部门 / 机器 / 团队成员列表排序
// 输入: 列表切片 + SortSpec (字段 + 方向)
// 输出: 排序后的新列表（稳定排序，输入不变）
// ==========================================
// 规则:
// - 方向翻转比较结果 (asc: +1, desc: -1)
// - 相等键保持原有相对顺序
// - 无法解析的维护日期在任何方向下都排在最后
// ==========================================

use crate::domain::{Department, Machine, SortDirection, TeamMember};
use crate::engine::aggregation::RosterEntry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// ==========================================
// 排序字段
// ==========================================

/// 部门排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DepartmentSortField {
    #[default]
    Name,         // department_name
    MachineCount, // machines.len()
}

/// 机器排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MachineSortField {
    #[default]
    Uptime,      // uptime_hours
    Energy,      // energy_consumption_kWh
    Maintenance, // last_maintenance (日期)
    Id,          // machine_id
}

/// 团队成员排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TeamSortField {
    #[default]
    Name,
    Role,
}

impl DepartmentSortField {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "name" => Some(Self::Name),
            "machineCount" | "machine_count" => Some(Self::MachineCount),
            _ => None,
        }
    }
}

impl MachineSortField {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "uptime" => Some(Self::Uptime),
            "energy" => Some(Self::Energy),
            "maintenance" => Some(Self::Maintenance),
            "id" => Some(Self::Id),
            _ => None,
        }
    }
}

impl TeamSortField {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "name" => Some(Self::Name),
            "role" => Some(Self::Role),
            _ => None,
        }
    }
}

// ==========================================
// SortSpec - 排序规格
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F> SortSpec<F> {
    pub fn asc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

impl<F: PartialEq + Copy> SortSpec<F> {
    /// 点击字段: 同一字段则翻转方向，不同字段则切换字段并翻转方向
    ///
    /// 与看板排序按钮行为一致（每次点击都翻转方向）
    pub fn clicked(self, field: F) -> Self {
        Self {
            field,
            direction: self.direction.toggled(),
        }
    }
}

impl<F: fmt::Debug> fmt::Display for SortSpec<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}-{}", self.field, self.direction)
    }
}

pub type DepartmentSort = SortSpec<DepartmentSortField>;
pub type MachineSort = SortSpec<MachineSortField>;
pub type TeamSort = SortSpec<TeamSortField>;

// ==========================================
// SortEngine - 排序引擎
// ==========================================
pub struct SortEngine {
    // 无状态引擎，不需要注入依赖
}

impl SortEngine {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 排序部门列表
    pub fn sort_departments(
        &self,
        departments: &[Department],
        spec: &DepartmentSort,
    ) -> Vec<Department> {
        let mut sorted = departments.to_vec();
        sorted.sort_by(|a, b| {
            let ord = match spec.field {
                DepartmentSortField::Name => locale_compare(&a.department_name, &b.department_name),
                DepartmentSortField::MachineCount => a.machine_count().cmp(&b.machine_count()),
            };
            apply_direction(ord, spec.direction)
        });
        sorted
    }

    /// 排序机器列表
    pub fn sort_machines(&self, machines: &[Machine], spec: &MachineSort) -> Vec<Machine> {
        let mut sorted = machines.to_vec();
        sorted.sort_by(|a, b| self.compare_machines(a, b, spec));
        sorted
    }

    /// 排序团队成员列表
    pub fn sort_team(&self, members: &[TeamMember], spec: &TeamSort) -> Vec<TeamMember> {
        let mut sorted = members.to_vec();
        sorted.sort_by(|a, b| self.compare_members(a, b, spec));
        sorted
    }

    /// 排序站点团队名册
    pub fn sort_roster(&self, roster: &[RosterEntry], spec: &TeamSort) -> Vec<RosterEntry> {
        let mut sorted = roster.to_vec();
        sorted.sort_by(|a, b| self.compare_members(&a.member, &b.member, spec));
        sorted
    }

    // ==========================================
    // 比较方法
    // ==========================================

    fn compare_members(&self, a: &TeamMember, b: &TeamMember, spec: &TeamSort) -> Ordering {
        let ord = match spec.field {
            TeamSortField::Name => locale_compare(&a.name, &b.name),
            TeamSortField::Role => locale_compare(&a.role, &b.role),
        };
        apply_direction(ord, spec.direction)
    }

    /// 比较两台机器
    ///
    /// 维护日期无法解析的一方固定排在后面，不受方向影响
    fn compare_machines(&self, a: &Machine, b: &Machine, spec: &MachineSort) -> Ordering {
        match spec.field {
            MachineSortField::Uptime => {
                apply_direction(a.uptime_hours.total_cmp(&b.uptime_hours), spec.direction)
            }
            MachineSortField::Energy => apply_direction(
                a.energy_consumption_kwh.total_cmp(&b.energy_consumption_kwh),
                spec.direction,
            ),
            MachineSortField::Maintenance => {
                match (a.maintenance_date(), b.maintenance_date()) {
                    (Some(da), Some(db)) => apply_direction(da.cmp(&db), spec.direction),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            }
            MachineSortField::Id => {
                apply_direction(locale_compare(&a.machine_id, &b.machine_id), spec.direction)
            }
        }
    }
}

impl Default for SortEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// 按方向调整比较结果
fn apply_direction(ord: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

/// 近似本地化字符串比较
///
/// 比较层级：
/// 1) 去除变音符号并大小写折叠后的基础字符（"Énergie" 与 "energie" 同级）
/// 2) 保留变音符号的小写文本（无重音者在前）
/// 3) 原始文本，小写在前
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| b.cmp(a))
}

/// 基础字符键：NFD 分解后去掉组合变音符号，再转小写
fn base_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// 重音键：NFD 分解后的小写文本
fn accent_key(s: &str) -> String {
    s.nfd().collect::<String>().to_lowercase()
}
