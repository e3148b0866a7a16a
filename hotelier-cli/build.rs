//! Build script for hotelier-cli.
//!
//! Generates the `hotelier.1` man page into `OUT_DIR` with `clap_mangen`.
//!
//! Build scripts cannot depend on the crate being built, so the command tree
//! is described again here at the level of detail a man page needs.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("hotelier")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book hotel rooms and manage hotels")
        .long_about(
            "Command-line front end for a hotel booking store: customers find hotels and book \
             rooms, managers update rooms, review bookings and dispatch repairs",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("HOTELIER_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true),
        )
        .subcommands(vec![
            Command::new("init").about("Create the data directory and database"),
            Command::new("seed-manager").about("Create a manager account"),
            Command::new("add-hotel").about("Create a hotel administered by a manager"),
            Command::new("add-room").about("Add a room to a hotel"),
            Command::new("add-company").about("Register a maintenance company"),
            Command::new("register").about("Register a customer account"),
            Command::new("hotels").about("List hotels near a location"),
            Command::new("rooms").about("List rooms of a hotel free on a date"),
            Command::new("book").about("Book a room for a date"),
            Command::new("bookings").about("Show your most recent bookings"),
            Command::new("update-room").about("Change price and image of a room"),
            Command::new("updates").about("Show recent room updates"),
            Command::new("history").about("Show bookings of your hotels"),
            Command::new("regulars").about("Show the most frequent customers of a hotel"),
            Command::new("repair").about("Request a room repair from a company"),
            Command::new("repairs").about("Show repairs you requested"),
            Command::new("completions").about("Generate shell completion scripts"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer).unwrap();
    fs::write(man_dir.join("hotelier.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
