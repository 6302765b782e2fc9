// ==========================================
// 工业站点智能看板 - 站点层级实体
// ==========================================
// 层级: Dataset → Site → Department → (TeamMember, Machine)
// 红线: 实体只读，派生视图不得回写数据集
// ==========================================

use crate::domain::types::MachineStatus;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// TeamMember - 团队成员
// ==========================================
// email 在同一部门团队内唯一
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
}

// ==========================================
// Machine - 机器快照
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub machine_id: String, // 部门内唯一
    #[serde(rename = "type")]
    pub machine_type: String,
    pub status: MachineStatus,
    pub temperature: f64, // 温度 (°C)
    pub vibration: f64,
    #[serde(rename = "energy_consumption_kWh")]
    pub energy_consumption_kwh: f64,
    pub last_maintenance: String, // 日历日期字符串，原样保留
    #[serde(default)]
    pub error: Option<String>, // 错误描述，可为 null
    pub uptime_hours: f64,
}

impl Machine {
    /// 是否带有非空错误描述
    pub fn has_error_text(&self) -> bool {
        self.error.as_deref().is_some_and(|e| !e.is_empty())
    }

    /// 解析最近维护日期
    ///
    /// 支持 `YYYY-MM-DD`、`YYYY-MM-DDTHH:MM:SS` 以及 `YYYY/MM/DD`；
    /// 无法解析时返回 None，由调用方决定排序位置
    pub fn maintenance_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.last_maintenance)
    }
}

/// 解析日历日期字符串
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y/%m/%d") {
        return Some(date);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

// ==========================================
// Department - 部门
// ==========================================
// 零台机器的部门合法
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub department_id: String, // 站点内唯一
    pub department_name: String,
    pub head: String,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub machines: Vec<Machine>,
}

impl Department {
    pub fn machine_count(&self) -> usize {
        self.machines.len()
    }
}

// ==========================================
// Site - 站点
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub site_id: String, // 全局唯一
    pub site_name: String,
    pub location: String, // "城市, 地区"
    #[serde(default)]
    pub departments: Vec<Department>,
}

impl Site {
    /// 站点下全部机器（按部门顺序展开）
    pub fn machines(&self) -> impl Iterator<Item = &Machine> {
        self.departments.iter().flat_map(|d| d.machines.iter())
    }

    pub fn machine_count(&self) -> usize {
        self.departments.iter().map(Department::machine_count).sum()
    }

    /// 团队人数（各部门直接相加，不去重）
    pub fn team_size(&self) -> usize {
        self.departments.iter().map(|d| d.team.len()).sum()
    }
}

// ==========================================
// Dataset - 数据集根对象
// ==========================================
// 启动时加载一次，会话期间只读
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub sites: Vec<Site>,
}

impl Dataset {
    pub fn new(sites: Vec<Site>) -> Self {
        Self { sites }
    }

    pub fn find_site(&self, site_id: &str) -> Option<&Site> {
        self.sites.iter().find(|s| s.site_id == site_id)
    }

    pub fn machine_count(&self) -> usize {
        self.sites.iter().map(Site::machine_count).sum()
    }
}
