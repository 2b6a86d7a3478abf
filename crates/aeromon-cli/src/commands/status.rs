use aeromon_core::MachineView;

/// One-shot snapshot: mount a view, optionally advance it, print, drop it.
pub fn run(machine_id: u32, ticks: u32, json: bool) {
    let machine = super::resolve_machine(machine_id);
    let mut view = MachineView::new(machine);
    for _ in 0..ticks {
        view.step();
    }

    if json {
        print_json(&view);
    } else {
        print_table(&view);
    }
}

fn print_json(view: &MachineView) {
    let machine = view.machine();
    let metrics: Vec<serde_json::Value> = view
        .metrics()
        .iter()
        .map(|m| {
            let (min, max) = m.kind.display_range();
            serde_json::json!({
                "name": m.kind.label(),
                "value": m.value,
                "unit": m.kind.unit(),
                "status": m.status.to_string(),
                "min": min,
                "max": max,
            })
        })
        .collect();
    let alerts: Vec<serde_json::Value> = view
        .alerts()
        .alerts()
        .iter()
        .map(|a| {
            serde_json::json!({
                "id": a.id,
                "message": a.message,
                "severity": a.severity.to_string(),
                "status": a.status.to_string(),
                "affected_part": a.affected_part,
                "raised_at": a.raised_at.to_rfc3339(),
            })
        })
        .collect();

    let out = serde_json::json!({
        "machine": {
            "id": machine.id,
            "name": machine.name,
            "status": view.status().to_string(),
            "location": machine.location,
            "model": machine.model,
        },
        "simulation_steps": view.steps(),
        "metrics": metrics,
        "alerts": alerts,
    });
    println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
}

fn print_table(view: &MachineView) {
    let machine = view.machine();

    println!("\n{}", "=".repeat(60));
    println!("{}  [{}]", machine.name, view.status());
    println!("{}", "=".repeat(60));
    println!("{} — {}", machine.location, machine.description);
    println!(
        "{} {} · s/n {} · installed {}",
        machine.manufacturer, machine.model, machine.serial_number, machine.installation_date
    );
    println!(
        "Maintenance: last {} · next {}",
        machine.last_maintenance, machine.next_maintenance
    );

    println!(
        "\n{:<14} {:>8} {:<5} {:<10} {:>12}",
        "Metric", "Value", "Unit", "Status", "Range"
    );
    println!("{}", "-".repeat(55));
    for m in view.metrics() {
        let (lo, hi) = m.kind.display_range();
        println!(
            "{:<14} {:>8.1} {:<5} {:<10} {:>5}–{}",
            m.kind.label(),
            m.value,
            m.kind.unit(),
            m.status.to_string(),
            lo,
            hi
        );
    }

    let alerts = view.alerts();
    println!("\nAlerts ({} active):", alerts.len());
    for a in alerts.alerts() {
        println!("  [{:<8}] {}  ({})", a.severity.to_string(), a.message, a.status);
    }
    if view.steps() > 0 {
        println!("\n(after {} simulation steps)", view.steps());
    }
}
