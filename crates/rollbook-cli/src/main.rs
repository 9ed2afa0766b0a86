//! Rollbook CLI
//!
//! Command-line driver for the record store

use clap::{Parser, Subcommand};
use rollbook_core::logging::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rollbook")]
#[command(about = "Rollbook - student record store", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Seed the demo roster and print the assigned ids
    Demo(commands::demo::DemoArgs),
}

fn main() {
    init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Demo(args) => commands::demo::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
