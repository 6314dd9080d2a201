use std::io::Write;

use clap::{Parser, Subcommand};

use specimen::{Record, scan_message, spawn_count, timing};

#[derive(Parser)]
#[command(name = "specimen", version, about = "Demonstration record fixture")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize two values and print the rendered record
    Render { par1: i32, par2: i32 },
    /// Scan a message and print its diagnostic lines
    Scan { message: String },
    /// Run the counting task to completion and print its total
    Count,
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Render { par1, par2 } => {
            println!("{}", Record::new(par1, par2));
        }
        Command::Scan { message } => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            scan_message(&message, &mut out);
            let _ = out.flush();
        }
        Command::Count => {
            let start = std::time::Instant::now();
            let total = spawn_count().join();
            timing::log("count-to-join", start.elapsed());
            println!("{total}");
        }
    }
}
