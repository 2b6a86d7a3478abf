use aeromon_core::{machines, MachineStatus};

pub fn run() {
    let fleet = machines();

    println!("Machine fleet ({} registered):\n", fleet.len());
    for m in fleet {
        println!(
            "  {} {:<20} {:<12} {}",
            super::status_glyph(m.status),
            m.name,
            m.status.to_string(),
            m.location
        );
        println!("      {} {} · s/n {}", m.manufacturer, m.model, m.serial_number);
    }

    let count = |s: MachineStatus| fleet.iter().filter(|m| m.status == s).count();
    println!();
    println!(
        "Summary: {} operational · {} maintenance · {} offline",
        count(MachineStatus::On),
        count(MachineStatus::Maintenance),
        count(MachineStatus::Off)
    );
}
