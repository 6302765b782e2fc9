// ==========================================
// 工业站点智能看板 - 领域类型定义
// ==========================================
// 职责: 机器状态、故障严重等级、排序方向等枚举
// 红线: 数据原样保留，未知状态值不得丢失
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 机器状态 (Machine Status)
// ==========================================
// 数据源中出现的字符串状态值
// 序列化格式: 小写字符串 (与数据源 JSON 一致)
// 历史值 "operational" 与其他未知值必须被容忍并原样回写
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MachineStatus {
    Online,          // 在线
    Offline,         // 离线
    Maintenance,     // 维护中
    Error,           // 故障
    Operational,     // 历史遗留值
    Unknown(String), // 未识别值
}

impl MachineStatus {
    /// 统计口径中参与计数的四种标准状态
    pub const COUNTED: [MachineStatus; 4] = [
        MachineStatus::Online,
        MachineStatus::Offline,
        MachineStatus::Maintenance,
        MachineStatus::Error,
    ];

    /// 从字符串解析状态（精确匹配，大小写敏感）
    pub fn parse(s: &str) -> Self {
        match s {
            "online" => MachineStatus::Online,
            "offline" => MachineStatus::Offline,
            "maintenance" => MachineStatus::Maintenance,
            "error" => MachineStatus::Error,
            "operational" => MachineStatus::Operational,
            other => MachineStatus::Unknown(other.to_string()),
        }
    }

    /// 原始字符串值
    pub fn as_str(&self) -> &str {
        match self {
            MachineStatus::Online => "online",
            MachineStatus::Offline => "offline",
            MachineStatus::Maintenance => "maintenance",
            MachineStatus::Error => "error",
            MachineStatus::Operational => "operational",
            MachineStatus::Unknown(s) => s.as_str(),
        }
    }

    /// 是否为计入状态统计的标准状态
    pub fn is_counted(&self) -> bool {
        Self::COUNTED.contains(self)
    }

    /// 国际化标签 key
    pub fn label_key(&self) -> &'static str {
        match self {
            MachineStatus::Online => "status.online",
            MachineStatus::Offline => "status.offline",
            MachineStatus::Maintenance => "status.maintenance",
            MachineStatus::Error => "status.error",
            MachineStatus::Operational => "status.operational",
            MachineStatus::Unknown(_) => "status.unknown",
        }
    }
}

impl From<String> for MachineStatus {
    fn from(s: String) -> Self {
        MachineStatus::parse(&s)
    }
}

impl From<MachineStatus> for String {
    fn from(status: MachineStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 故障严重等级 (Severity Tier)
// ==========================================
// 顺序: Critical > High > Medium > Low
// 注意: Low 属于分级体系的一部分，但现行故障筛选规则下不可达
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Critical, // 严重: status == error
    High,     // 高: status == offline
    Medium,   // 中: 带错误描述
    Low,      // 低: 保留等级
}

impl SeverityTier {
    pub fn label_key(&self) -> &'static str {
        match self {
            SeverityTier::Critical => "severity.critical",
            SeverityTier::High => "severity.high",
            SeverityTier::Medium => "severity.medium",
            SeverityTier::Low => "severity.low",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityTier::Critical => write!(f, "critical"),
            SeverityTier::High => write!(f, "high"),
            SeverityTier::Medium => write!(f, "medium"),
            SeverityTier::Low => write!(f, "low"),
        }
    }
}

// ==========================================
// 排序方向 (Sort Direction)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,  // 升序
    Desc, // 降序
}

impl SortDirection {
    /// 切换方向（界面点击同一字段时翻转）
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// 从字符串解析方向，无法识别时返回 None
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}
