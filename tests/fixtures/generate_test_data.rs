// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成合成的站点数据集 JSON（大数据量/边界场景）
// 用法: generate_test_data [输出路径] [站点数]
// 输出: 默认 tests/fixtures/datasets/synthetic_sites.json
// ==========================================

use chrono::{Duration, NaiveDate};
use industrial_intelligence::domain::{
    Dataset, Department, Machine, MachineStatus, Site, TeamMember,
};
use industrial_intelligence::export::to_json;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

const LOCATIONS: [&str; 5] = [
    "Detroit, MI",
    "Cleveland, OH",
    "Houston, TX",
    "Montreal, QC",
    "Monterrey, NL",
];
const DEPARTMENTS: [&str; 4] = ["Assembly", "Welding", "Quality Control", "Packaging"];
const MACHINE_TYPES: [&str; 5] = ["Press", "Conveyor", "Welding Robot", "CNC", "Palletizer"];
const ROLES: [&str; 4] = ["Engineer", "Technician", "Supervisor", "Operator"];
const ERRORS: [&str; 3] = ["Overheat", "Hydraulic pressure low", "Sensor drift"];

// 生成单台机器
fn generate_machine(site: usize, dept: usize, index: usize) -> Machine {
    let seed = site * 97 + dept * 31 + index * 7;
    let status = match seed % 9 {
        0 => MachineStatus::Error,
        1 => MachineStatus::Offline,
        2 => MachineStatus::Maintenance,
        _ => MachineStatus::Online,
    };

    // 每 13 台给一条无法解析的维护日期
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let last_maintenance = if seed % 13 == 0 {
        "unknown".to_string()
    } else {
        (base + Duration::days((seed % 360) as i64)).to_string()
    };

    let error = match status {
        MachineStatus::Error => Some(ERRORS[seed % ERRORS.len()].to_string()),
        MachineStatus::Online if seed % 11 == 0 => Some("Minor lubrication warning".to_string()),
        _ => None,
    };

    Machine {
        machine_id: format!("S{:02}-D{}-M{:03}", site + 1, dept + 1, index + 1),
        machine_type: MACHINE_TYPES[seed % MACHINE_TYPES.len()].to_string(),
        status,
        temperature: 30.0 + (seed % 70) as f64 * 0.9,
        vibration: 0.1 + (seed % 30) as f64 * 0.1,
        energy_consumption_kwh: 50.0 + (seed % 90) as f64 * 10.0,
        last_maintenance,
        error,
        uptime_hours: 100.0 + (seed % 80) as f64 * 100.0,
    }
}

// 生成部门（团队成员首位跨部门共享，用于名册去重场景）
fn generate_department(site: usize, dept: usize, machines: usize) -> Department {
    let mut team: Vec<TeamMember> = (0..3)
        .map(|k| TeamMember {
            name: format!("Member {}-{}-{}", site + 1, dept + 1, k + 1),
            role: ROLES[(dept + k) % ROLES.len()].to_string(),
            email: format!("member.{}.{}.{}@industrial.example", site + 1, dept + 1, k + 1),
            phone: format!("+1-555-{:04}", site * 100 + dept * 10 + k),
        })
        .collect();
    team.push(TeamMember {
        name: format!("Safety Lead {}", site + 1),
        role: "Safety Officer".to_string(),
        email: format!("safety.{}@industrial.example", site + 1),
        phone: "+1-555-0911".to_string(),
    });

    Department {
        department_id: format!("S{:02}-D{}", site + 1, dept + 1),
        department_name: DEPARTMENTS[dept % DEPARTMENTS.len()].to_string(),
        head: team[0].name.clone(),
        team,
        machines: (0..machines).map(|i| generate_machine(site, dept, i)).collect(),
    }
}

fn generate_dataset(site_count: usize) -> Dataset {
    let sites = (0..site_count)
        .map(|s| Site {
            site_id: format!("SITE-{:03}", s + 1),
            site_name: format!("Synthetic Plant {}", s + 1),
            location: LOCATIONS[s % LOCATIONS.len()].to_string(),
            // 最后一个部门无机器
            departments: (0..DEPARTMENTS.len())
                .map(|d| {
                    let machines = if d + 1 == DEPARTMENTS.len() { 0 } else { 3 + (s + d) % 6 };
                    generate_department(s, d, machines)
                })
                .collect(),
        })
        .collect();
    Dataset::new(sites)
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/datasets/synthetic_sites.json"));
    let site_count: usize = match args.next() {
        Some(s) => s.parse()?,
        None => 12,
    };

    println!("开始生成测试数据集...");

    let dataset = generate_dataset(site_count);
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output, to_json(&dataset)?)?;

    println!(
        "✓ 已生成: {} ({} 个站点，{} 台机器)",
        output.display(),
        dataset.sites.len(),
        dataset.machine_count()
    );
    Ok(())
}
