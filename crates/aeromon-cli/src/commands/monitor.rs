pub fn run(machine_id: u32) {
    let machine = super::resolve_machine(machine_id);
    let mut app = crate::tui::app::App::new(machine);
    if let Err(e) = app.run() {
        eprintln!("TUI error: {e}");
        std::process::exit(1);
    }
}
