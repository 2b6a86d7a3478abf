//! CLI for aeromon — a blower fleet in a box.

mod commands;
mod tui;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "aeromon")]
#[command(about = "aeromon — monitoring dashboard for industrial blower machines")]
#[command(version = aeromon_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the machine fleet with summary counts
    Machines,

    /// One-shot status snapshot of a machine view
    Status {
        /// Machine id
        #[arg(default_value = "1")]
        machine: u32,

        /// Advance the simulation this many steps before printing
        #[arg(long, default_value = "0")]
        ticks: u32,

        /// Emit machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Live interactive machine dashboard (TUI)
    Monitor {
        /// Machine id
        #[arg(default_value = "1")]
        machine: u32,
    },

    /// Start the HTTP status server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8051")]
        port: u16,

        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Machines => commands::machines::run(),
        Commands::Status {
            machine,
            ticks,
            json,
        } => commands::status::run(machine, ticks, json),
        Commands::Monitor { machine } => commands::monitor::run(machine),
        Commands::Serve { port, host } => commands::serve::run(&host, port),
    }
}
