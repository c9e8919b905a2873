//! The Mica interpreter CLI.
//!
//! This binary starts the interactive shell by default and provides
//! `mica run <file>` for executing scripts; error reporting is delegated
//! to the diagnostics module.

use clap::{Parser, Subcommand};

mod diagnostics;
mod driver;
mod repl;

/// Command-line interface for the Mica interpreter.
#[derive(Parser)]
#[command(name = "mica")]
#[command(about = "The Mica scripting language", long_about = None)]
#[command(version)]
struct Cli {
    /// The subcommand to execute; omitted means the interactive shell.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Run a Mica script file.
    Run {
        /// The source file to execute (e.g., `hello.mica`).
        file: String,
    },
    /// Start the interactive shell.
    Repl,
}

/// Entry point for the Mica interpreter.
fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { file }) => std::process::exit(driver::run(&file)),
        Some(Commands::Repl) | None => {
            print_banner();
            if let Err(error) = repl::start() {
                eprintln!("Error: {error}");
                std::process::exit(1);
            }
        }
    }
}

fn print_banner() {
    println!("Mica {} interactive shell", env!("CARGO_PKG_VERSION"));
    println!("Type \"clean()\", \"show()\" or \"exit()\" for session commands.");
}
