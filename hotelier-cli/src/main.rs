//! Main entry point for the hotelier CLI.
//!
//! Customers find hotels, book rooms and list their bookings; managers
//! update rooms, review booking history and regular customers, and request
//! repairs. Every command prints plain lines and reports failures through
//! its exit code.

use clap::Parser;
use hotelier_cli::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 4; help and version exit 0.
            let code = if e.use_stderr() { 4 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let _level = hotelier::init_logger(cli.verbose, cli.quiet);
    let global = cli.global_options();

    match cli.command.execute(&global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
