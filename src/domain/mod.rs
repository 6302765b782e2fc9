// ==========================================
// 工业站点智能看板 - 领域模型层
// ==========================================
// 职责: 定义站点层级实体与枚举类型
// 红线: 不含筛选/聚合逻辑，不含文件读写
// ==========================================

pub mod site;
pub mod types;

// 重导出核心类型
pub use site::{parse_calendar_date, Dataset, Department, Machine, Site, TeamMember};
pub use types::{MachineStatus, SeverityTier, SortDirection};
