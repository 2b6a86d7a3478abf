//! Machine registry — fixed reference records for the blower fleet.
//!
//! The registry is static configuration data: three machines, looked up by
//! id. The simulation never writes here; a live view flips its own copy of
//! the status.

use serde::{Deserialize, Serialize};

/// Operational state of a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineStatus {
    On,
    Off,
    Maintenance,
}

impl std::fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => write!(f, "operational"),
            Self::Off => write!(f, "offline"),
            Self::Maintenance => write!(f, "maintenance"),
        }
    }
}

impl MachineStatus {
    /// The status-flip simulator walks this cycle:
    /// on → maintenance → off → on.
    pub fn next(self) -> Self {
        match self {
            Self::On => Self::Maintenance,
            Self::Maintenance => Self::Off,
            Self::Off => Self::On,
        }
    }
}

/// Static descriptive record for one machine. Immutable reference data.
#[derive(Debug, Clone, Serialize)]
pub struct Machine {
    pub id: u32,
    pub name: &'static str,
    pub status: MachineStatus,
    pub description: &'static str,
    pub last_maintenance: &'static str,
    pub next_maintenance: &'static str,
    pub location: &'static str,
    pub manufacturer: &'static str,
    pub model: &'static str,
    pub serial_number: &'static str,
    pub installation_date: &'static str,
}

/// The fixed blower fleet.
pub const MACHINES: [Machine; 3] = [
    Machine {
        id: 1,
        name: "Blower #IDS-2023",
        status: MachineStatus::On,
        description: "High-pressure air compressor for the main production line",
        last_maintenance: "2023-12-15",
        next_maintenance: "2024-06-15",
        location: "Building A, floor 2",
        manufacturer: "Atlas Copco",
        model: "GA 75 VSD+",
        serial_number: "AC-2023-075",
        installation_date: "2023-01-10",
    },
    Machine {
        id: 2,
        name: "Blower #IDS-2024",
        status: MachineStatus::Maintenance,
        description: "Medium-pressure air compressor for production area B",
        last_maintenance: "2024-02-20",
        next_maintenance: "2024-08-20",
        location: "Building B, floor 1",
        manufacturer: "Ingersoll Rand",
        model: "Nirvana NV 90",
        serial_number: "IR-2024-090",
        installation_date: "2024-01-05",
    },
    Machine {
        id: 3,
        name: "Blower #IDS-2025",
        status: MachineStatus::Off,
        description: "Low-pressure air compressor for the packaging area",
        last_maintenance: "2024-03-10",
        next_maintenance: "2024-09-10",
        location: "Building C, floor 3",
        manufacturer: "Kaeser",
        model: "Sigma Control 2.0",
        serial_number: "KS-2025-110",
        installation_date: "2024-02-15",
    },
];

/// Look up a machine by id. Absent for any id outside the registry;
/// callers render a not-found fallback instead of failing.
pub fn machine_by_id(id: u32) -> Option<&'static Machine> {
    MACHINES.iter().find(|m| m.id == id)
}

/// The whole registry, in id order.
pub fn machines() -> &'static [Machine] {
    &MACHINES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_machine() {
        let m = machine_by_id(1).expect("machine 1 registered");
        assert_eq!(m.id, 1);
        assert_eq!(m.status, MachineStatus::On);
        assert_eq!(m.name, "Blower #IDS-2023");
    }

    #[test]
    fn lookup_unknown_machine_is_absent() {
        assert!(machine_by_id(99).is_none());
        assert!(machine_by_id(0).is_none());
    }

    #[test]
    fn registry_has_three_machines_with_unique_ids() {
        assert_eq!(machines().len(), 3);
        let mut ids: Vec<u32> = machines().iter().map(|m| m.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn registry_covers_all_statuses() {
        assert_eq!(machine_by_id(1).unwrap().status, MachineStatus::On);
        assert_eq!(machine_by_id(2).unwrap().status, MachineStatus::Maintenance);
        assert_eq!(machine_by_id(3).unwrap().status, MachineStatus::Off);
    }

    #[test]
    fn status_cycle_wraps() {
        assert_eq!(MachineStatus::On.next(), MachineStatus::Maintenance);
        assert_eq!(MachineStatus::Maintenance.next(), MachineStatus::Off);
        assert_eq!(MachineStatus::Off.next(), MachineStatus::On);
        // Three steps return to the start.
        let s = MachineStatus::On;
        assert_eq!(s.next().next().next(), s);
    }

    #[test]
    fn status_labels() {
        assert_eq!(MachineStatus::On.to_string(), "operational");
        assert_eq!(MachineStatus::Off.to_string(), "offline");
        assert_eq!(MachineStatus::Maintenance.to_string(), "maintenance");
    }
}
