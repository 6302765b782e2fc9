// ==========================================
// 工业站点智能看板 - 引擎层
// ==========================================
// 职责: 筛选、排序、聚合规则
// 红线: 引擎无状态，输入只读，输出为新集合
// ==========================================

pub mod aggregation;
pub mod filter;
pub mod sort;

// 重导出核心引擎
pub use aggregation::{
    AggregationEngine, AverageMetrics, ComparisonReport, FaultSummary, FilterOptions, MetricPair,
    RankedMachine, RosterEntry, SiteSlice, SiteSummary, StatusCounts,
};
pub use filter::{FilterCriteria, FilterEngine};
pub use sort::{
    locale_compare, DepartmentSort, DepartmentSortField, MachineSort, MachineSortField, SortEngine,
    SortSpec, TeamSort, TeamSortField,
};
