// ==========================================
// AggregationEngine 集成测试
// ==========================================
// 测试目标: 状态计数、平均指标、故障清单、团队名册、站点对比
// ==========================================

mod helpers;

use helpers::test_data_builder::sample_dataset;
use industrial_intelligence::domain::{MachineStatus, SeverityTier};
use industrial_intelligence::engine::AggregationEngine;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_status_counts_site() {
    let dataset = sample_dataset();
    let engine = AggregationEngine::new();

    let counts = engine.status_counts(dataset.sites[0].machines());
    assert_eq!(counts.online, 2);
    assert_eq!(counts.offline, 1);
    assert_eq!(counts.maintenance, 1);
    assert_eq!(counts.error, 1);
    assert_eq!(counts.issues(), 2);
}

#[test]
fn test_average_metrics() {
    let dataset = sample_dataset();
    let engine = AggregationEngine::new();

    let averages = engine.average_metrics(dataset.sites[0].machines()).unwrap();
    assert!(approx(averages.avg_temp, 63.4));
    assert!(approx(averages.avg_energy, 220.0));
    assert!(approx(averages.avg_uptime, 2900.0));

    // 无机器 → 不可计算
    assert!(engine.average_metrics(dataset.sites[2].machines()).is_none());
}

#[test]
fn test_fault_list_order_and_severity() {
    let dataset = sample_dataset();
    let engine = AggregationEngine::new();

    let faults = engine.fault_list(&dataset);
    let ids: Vec<&str> = faults.iter().map(|f| f.machine.machine_id.as_str()).collect();
    assert_eq!(ids, vec!["A-02", "B-02", "W-01", "W-02"]);

    let tiers: Vec<SeverityTier> = faults.iter().map(|f| f.severity).collect();
    assert_eq!(
        tiers,
        vec![
            SeverityTier::Critical,
            SeverityTier::Critical,
            SeverityTier::High,
            SeverityTier::Medium
        ]
    );

    // 所属位置信息
    assert_eq!(faults[1].site_name, "Beta Plant");
    assert_eq!(faults[1].department_name, "Assembly");
    assert!(faults.iter().all(|f| f.severity != SeverityTier::Low));
}

#[test]
fn test_fault_summary() {
    let dataset = sample_dataset();
    let engine = AggregationEngine::new();

    let summary = engine.fault_summary(&engine.fault_list(&dataset));
    assert_eq!(summary.critical, 2);
    assert_eq!(summary.high, 1);
    assert_eq!(summary.medium, 1);
    assert_eq!(summary.low, 0);
    assert_eq!(summary.total, 4);
}

#[test]
fn test_team_roster_dedup_by_email() {
    let dataset = sample_dataset();
    let engine = AggregationEngine::new();

    let roster = engine.team_roster(&dataset.sites[0]);
    assert_eq!(roster.len(), 4);

    // 首次出现者保留: Sam 属于 Assembly
    let sam = roster.iter().find(|r| r.member.email == "sam@alpha.example").unwrap();
    assert_eq!(sam.department, "Assembly");
}

#[test]
fn test_compare_sites() {
    let dataset = sample_dataset();
    let engine = AggregationEngine::new();

    let report = engine.compare_sites(&dataset.sites[0], &dataset.sites[1]);
    assert_eq!(report.site_a_name, "Alpha Works");
    assert_eq!(report.site_b_name, "Beta Plant");
    assert_eq!((report.online.site_a, report.online.site_b), (2, 1));
    assert_eq!((report.offline.site_a, report.offline.site_b), (1, 0));
    assert_eq!((report.error.site_a, report.error.site_b), (1, 1));
    assert_eq!((report.departments.site_a, report.departments.site_b), (2, 2));
    assert_eq!((report.total_machines.site_a, report.total_machines.site_b), (5, 2));
    // 团队人数不去重
    assert_eq!((report.team_members.site_a, report.team_members.site_b), (5, 1));

    let avg_b = report.averages.site_b.unwrap();
    assert!(approx(avg_b.avg_temp, 79.5));
}

#[test]
fn test_compare_with_empty_site() {
    let dataset = sample_dataset();
    let engine = AggregationEngine::new();

    let report = engine.compare_sites(&dataset.sites[0], &dataset.sites[2]);
    assert!(report.averages.site_a.is_some());
    assert!(report.averages.site_b.is_none());
    assert_eq!(report.total_machines.site_b, 0);
}

#[test]
fn test_compare_selection_requires_two() {
    let dataset = sample_dataset();
    let engine = AggregationEngine::new();
    let s1 = &dataset.sites[0];
    let s2 = &dataset.sites[1];
    let s3 = &dataset.sites[2];

    assert!(engine.compare_selection(&[]).is_none());
    assert!(engine.compare_selection(&[s1]).is_none());
    assert!(engine.compare_selection(&[s1, s2, s3]).is_none());
    assert!(engine.compare_selection(&[s1, s2]).is_some());
}

#[test]
fn test_site_summary_and_overview() {
    let dataset = sample_dataset();
    let engine = AggregationEngine::new();

    let summary = engine.site_summary(&dataset.sites[0]);
    assert_eq!(summary.department_count, 2);
    assert_eq!(summary.total_machines, 5);
    assert_eq!(summary.online_machines, 2);
    assert_eq!(summary.issues, 2);
    assert_eq!(summary.unique_team_members, 4);

    let slices = engine.site_overview(&dataset.sites);
    let values: Vec<usize> = slices.iter().map(|s| s.department_count).collect();
    assert_eq!(values, vec![2, 2, 0]);
}

#[test]
fn test_filter_options() {
    let dataset = sample_dataset();
    let engine = AggregationEngine::new();

    let options = engine.filter_options(&dataset);
    assert_eq!(options.locations, vec!["Detroit, MI", "Cleveland, OH", "Houston, TX"]);
    assert_eq!(options.department_types, vec!["Assembly", "Welding", "Packaging"]);
    assert_eq!(options.machine_types, vec!["Press", "Conveyor", "Welding Robot"]);
    assert_eq!(options.machine_statuses, MachineStatus::COUNTED.to_vec());
}
