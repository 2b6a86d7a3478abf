pub mod machines;
pub mod monitor;
pub mod serve;
pub mod status;

use aeromon_core::{machine_by_id, machines, Machine, MachineStatus};

/// Resolve a machine id, or print the not-found fallback and exit.
///
/// A missing machine is the one real error condition this tool has; every
/// command funnels through here so the fallback looks the same everywhere.
pub fn resolve_machine(id: u32) -> &'static Machine {
    match machine_by_id(id) {
        Some(machine) => machine,
        None => {
            eprintln!("Machine {id} not found. Registered machines:");
            for m in machines() {
                eprintln!("  {}  {}", m.id, m.name);
            }
            std::process::exit(1);
        }
    }
}

/// Terminal glyph for a machine status.
pub fn status_glyph(status: MachineStatus) -> &'static str {
    match status {
        MachineStatus::On => "●",
        MachineStatus::Maintenance => "◐",
        MachineStatus::Off => "○",
    }
}
