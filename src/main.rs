// ==========================================
// 工业站点智能看板 - 命令行入口
// ==========================================
// 用法:
//   industrial-intelligence overview [query]
//   industrial-intelligence site <site_id>
//   industrial-intelligence faults
//   industrial-intelligence compare <site_a> <site_b>
//   industrial-intelligence options
//   industrial-intelligence export <json|csv> [dir]
// ==========================================

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use industrial_intelligence::app::{AppState, DashboardView};
use industrial_intelligence::config::DashboardConfig;
use industrial_intelligence::engine::{AverageMetrics, ComparisonReport, MetricPair};
use industrial_intelligence::i18n::{self, severity_label, status_label, t, t_with_args};
use industrial_intelligence::{logging, APP_NAME, VERSION};

const USAGE: &str = concat!(
    "usage: industrial-intelligence <overview [query] | site <site_id> | faults",
    " | compare <a> <b> | options | export <json|csv> [dir]>"
);

fn main() -> Result<()> {
    logging::init_with_default("warn");

    let config = DashboardConfig::load().context("加载看板配置失败")?;
    i18n::set_locale(&config.locale);

    tracing::info!("{} v{}", APP_NAME, VERSION);
    tracing::info!("使用数据集: {}", config.dataset_path.display());

    let mut state = AppState::load(config).context("初始化AppState失败")?;

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "overview".to_string());

    match command.as_str() {
        "overview" => {
            if let Some(query) = args.next() {
                state.session.set_search(query);
            }
            print_overview(&state.view());
        }
        "site" => {
            let site_id = args.next().context(USAGE)?;
            // 提前校验，给出明确的未找到错误
            state.dashboard_api.get_site(&site_id)?;
            state.session.select_site(&site_id);
            print_site_detail(&state.view());
        }
        "faults" => print_faults(&state.view()),
        "compare" => {
            let ids: Vec<String> = args.collect();
            let report = state.dashboard_api.compare_sites(&ids)?;
            print_comparison(&report);
        }
        "options" => {
            let options = state.dashboard_api.get_filter_options();
            println!("{}", serde_json::to_string_pretty(&options)?);
        }
        "export" => {
            let format = args.next().context(USAGE)?;
            let dir = args
                .next()
                .map(PathBuf::from)
                .unwrap_or_else(|| state.config.export_dir.clone());
            let path = state.dashboard_api.export_to_dir(&format, &dir)?;
            let path = path.display().to_string();
            println!("{}", t_with_args("export.written", &[("path", path.as_str())]));
        }
        other => bail!("unknown command: {}\n{}", other, USAGE),
    }

    Ok(())
}

// ==========================================
// 输出
// ==========================================

fn print_overview(view: &DashboardView) {
    println!("== {} ==", t("dashboard.overview_title"));
    if view.no_site_matches {
        println!("{}", t("dashboard.no_site_matches"));
        return;
    }
    for slice in &view.overview {
        println!(
            "{:<10} {:<28} {:<24} {}={} {}={}",
            slice.site_id,
            slice.site_name,
            slice.location,
            t("metric.departments"),
            slice.department_count,
            t("metric.total_machines"),
            slice.machine_count
        );
    }
}

fn print_site_detail(view: &DashboardView) {
    let Some(detail) = &view.site_detail else {
        println!("{}", t("common.no_data"));
        return;
    };

    println!("== {} ({}) ==", detail.site_name, detail.location);
    println!(
        "{}={} {}={} {}={} {}={}",
        t("metric.departments"),
        detail.summary.department_count,
        t("metric.total_machines"),
        detail.summary.total_machines,
        t("metric.online"),
        detail.summary.online_machines,
        t("metric.team_members"),
        detail.summary.unique_team_members
    );

    if detail.no_department_matches {
        println!("{}", t("dashboard.no_department_matches"));
        return;
    }

    for dept in &detail.departments {
        println!("-- {} [{}] {}", dept.department_name, dept.department_id, dept.head);
        if dept.no_machine_matches {
            println!("   {}", t("dashboard.no_machine_matches"));
            continue;
        }
        for machine in &dept.machines {
            println!(
                "   {:<12} {:<16} {:<10} {:>7.1}°C {:>9.1}kWh {:>8.0}h {}",
                machine.machine_id,
                machine.machine_type,
                status_label(&machine.status),
                machine.temperature,
                machine.energy_consumption_kwh,
                machine.uptime_hours,
                machine.last_maintenance
            );
        }
    }
}

fn print_faults(view: &DashboardView) {
    println!("== {} ==", t("dashboard.fault_title"));
    let summary = &view.fault_summary;
    println!(
        "{}={} {}={} {}={}",
        t("severity.critical"),
        summary.critical,
        t("severity.high"),
        summary.high,
        t("severity.medium"),
        summary.medium
    );
    for fault in &view.faults {
        println!(
            "[{}] {:<12} {:<24} {:<20} {} {}",
            severity_label(fault.severity),
            fault.machine.machine_id,
            fault.site_name,
            fault.department_name,
            fault.machine.last_maintenance,
            fault.machine.error.as_deref().unwrap_or("")
        );
    }
}

fn print_comparison(report: &ComparisonReport) {
    println!("== {} ==", t("dashboard.comparison_title"));
    println!("{:<28} {:>16} {:>16}", "", report.site_a_name, report.site_b_name);

    let counts: [(&str, &MetricPair<usize>); 7] = [
        ("metric.online", &report.online),
        ("metric.offline", &report.offline),
        ("metric.maintenance", &report.maintenance),
        ("metric.error", &report.error),
        ("metric.departments", &report.departments),
        ("metric.total_machines", &report.total_machines),
        ("metric.team_members", &report.team_members),
    ];
    for (key, pair) in counts {
        println!("{:<28} {:>16} {:>16}", t(key), pair.site_a, pair.site_b);
    }

    let averages: [(&str, fn(&AverageMetrics) -> f64); 3] = [
        ("metric.avg_temp", |a| a.avg_temp),
        ("metric.avg_energy", |a| a.avg_energy),
        ("metric.avg_uptime", |a| a.avg_uptime),
    ];
    for (key, pick) in averages {
        println!(
            "{:<28} {:>16} {:>16}",
            t(key),
            format_average(report.averages.site_a.as_ref().map(pick)),
            format_average(report.averages.site_b.as_ref().map(pick))
        );
    }
}

fn format_average(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => t("common.not_available"),
    }
}
