// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use industrial_intelligence::domain::{
    Dataset, Department, Machine, MachineStatus, Site, TeamMember,
};

// ==========================================
// Machine 构建器
// ==========================================

pub struct MachineBuilder {
    machine_id: String,
    machine_type: String,
    status: MachineStatus,
    temperature: f64,
    vibration: f64,
    energy_consumption_kwh: f64,
    last_maintenance: String,
    error: Option<String>,
    uptime_hours: f64,
}

impl MachineBuilder {
    pub fn new(machine_id: &str) -> Self {
        Self {
            machine_id: machine_id.to_string(),
            machine_type: "Press".to_string(),
            status: MachineStatus::Online,
            temperature: 50.0,
            vibration: 0.5,
            energy_consumption_kwh: 100.0,
            last_maintenance: "2024-01-01".to_string(),
            error: None,
            uptime_hours: 1000.0,
        }
    }

    pub fn machine_type(mut self, machine_type: &str) -> Self {
        self.machine_type = machine_type.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = MachineStatus::parse(status);
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn energy(mut self, kwh: f64) -> Self {
        self.energy_consumption_kwh = kwh;
        self
    }

    pub fn last_maintenance(mut self, date: &str) -> Self {
        self.last_maintenance = date.to_string();
        self
    }

    pub fn error(mut self, message: &str) -> Self {
        self.error = Some(message.to_string());
        self
    }

    pub fn uptime(mut self, hours: f64) -> Self {
        self.uptime_hours = hours;
        self
    }

    pub fn build(self) -> Machine {
        Machine {
            machine_id: self.machine_id,
            machine_type: self.machine_type,
            status: self.status,
            temperature: self.temperature,
            vibration: self.vibration,
            energy_consumption_kwh: self.energy_consumption_kwh,
            last_maintenance: self.last_maintenance,
            error: self.error,
            uptime_hours: self.uptime_hours,
        }
    }
}

// ==========================================
// Department 构建器
// ==========================================

pub struct DepartmentBuilder {
    department: Department,
}

impl DepartmentBuilder {
    pub fn new(department_id: &str, department_name: &str) -> Self {
        Self {
            department: Department {
                department_id: department_id.to_string(),
                department_name: department_name.to_string(),
                head: String::new(),
                team: Vec::new(),
                machines: Vec::new(),
            },
        }
    }

    pub fn head(mut self, head: &str) -> Self {
        self.department.head = head.to_string();
        self
    }

    pub fn member(mut self, name: &str, role: &str, email: &str) -> Self {
        self.department.team.push(TeamMember {
            name: name.to_string(),
            role: role.to_string(),
            email: email.to_string(),
            phone: "+1-555-0100".to_string(),
        });
        self
    }

    pub fn machine(mut self, machine: Machine) -> Self {
        self.department.machines.push(machine);
        self
    }

    pub fn build(self) -> Department {
        self.department
    }
}

// ==========================================
// Site 构建器
// ==========================================

pub struct SiteBuilder {
    site: Site,
}

impl SiteBuilder {
    pub fn new(site_id: &str, site_name: &str, location: &str) -> Self {
        Self {
            site: Site {
                site_id: site_id.to_string(),
                site_name: site_name.to_string(),
                location: location.to_string(),
                departments: Vec::new(),
            },
        }
    }

    pub fn department(mut self, department: Department) -> Self {
        self.site.departments.push(department);
        self
    }

    pub fn build(self) -> Site {
        self.site
    }
}

// ==========================================
// 标准测试数据集
// ==========================================
// S1 Alpha Works (Detroit, MI)
//   D1 Assembly: A-01 online / A-02 error / A-03 maintenance
//   D2 Welding:  W-01 offline / W-02 online + 错误描述 + 无法解析的维护日期
// S2 Beta Plant (Cleveland, OH)
//   D3 Assembly:  B-01 online / B-02 error
//   D4 Packaging: 无机器、无团队
// S3 Gamma Yard (Houston, TX): 无部门
// ==========================================

pub fn sample_dataset() -> Dataset {
    let s1 = SiteBuilder::new("S1", "Alpha Works", "Detroit, MI")
        .department(
            DepartmentBuilder::new("D1", "Assembly")
                .head("Maria Lopez")
                .member("Maria Lopez", "Supervisor", "maria@alpha.example")
                .member("Tom Reed", "Technician", "tom@alpha.example")
                .member("Sam Cole", "Safety Officer", "sam@alpha.example")
                .machine(
                    MachineBuilder::new("A-01")
                        .temperature(70.0)
                        .energy(300.0)
                        .last_maintenance("2024-05-10")
                        .uptime(4000.0)
                        .build(),
                )
                .machine(
                    MachineBuilder::new("A-02")
                        .machine_type("Conveyor")
                        .status("error")
                        .temperature(92.0)
                        .energy(150.0)
                        .last_maintenance("2024-03-01")
                        .error("Overheat")
                        .uptime(1200.0)
                        .build(),
                )
                .machine(
                    MachineBuilder::new("A-03")
                        .status("maintenance")
                        .temperature(40.0)
                        .energy(100.0)
                        .last_maintenance("2024-06-15")
                        .uptime(800.0)
                        .build(),
                )
                .build(),
        )
        .department(
            DepartmentBuilder::new("D2", "Welding")
                .head("Ken Ito")
                .member("Ken Ito", "Engineer", "ken@alpha.example")
                .member("Sam Cole", "Safety Officer", "sam@alpha.example")
                .machine(
                    MachineBuilder::new("W-01")
                        .machine_type("Welding Robot")
                        .status("offline")
                        .temperature(30.0)
                        .energy(50.0)
                        .last_maintenance("2024-01-20")
                        .uptime(2500.0)
                        .build(),
                )
                .machine(
                    MachineBuilder::new("W-02")
                        .machine_type("Welding Robot")
                        .temperature(85.0)
                        .energy(500.0)
                        .last_maintenance("pending")
                        .error("Arc instability")
                        .uptime(6000.0)
                        .build(),
                )
                .build(),
        )
        .build();

    let s2 = SiteBuilder::new("S2", "Beta Plant", "Cleveland, OH")
        .department(
            DepartmentBuilder::new("D3", "Assembly")
                .head("Lena Park")
                .member("Lena Park", "Supervisor", "lena@beta.example")
                .machine(
                    MachineBuilder::new("B-01")
                        .temperature(60.0)
                        .energy(200.0)
                        .last_maintenance("2024-07-01")
                        .uptime(3000.0)
                        .build(),
                )
                .machine(
                    MachineBuilder::new("B-02")
                        .machine_type("Conveyor")
                        .status("error")
                        .temperature(99.0)
                        .energy(250.0)
                        .last_maintenance("2024-02-10")
                        .error("Belt snapped")
                        .uptime(100.0)
                        .build(),
                )
                .build(),
        )
        .department(DepartmentBuilder::new("D4", "Packaging").head("Omar Ali").build())
        .build();

    let s3 = SiteBuilder::new("S3", "Gamma Yard", "Houston, TX").build();

    Dataset::new(vec![s1, s2, s3])
}

/// 取机器编号列表
pub fn machine_ids(machines: &[Machine]) -> Vec<&str> {
    machines.iter().map(|m| m.machine_id.as_str()).collect()
}
