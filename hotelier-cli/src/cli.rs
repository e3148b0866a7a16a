//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddCompanyCommand, AddHotelCommand, AddRoomCommand, BookCommand, BookingsCommand,
    CompletionsCommand, HistoryCommand, HotelsCommand, InitCommand, RegisterCommand,
    RegularsCommand, RepairCommand, RepairsCommand, RoomsCommand, SeedManagerCommand,
    UpdateRoomCommand, UpdatesCommand,
};
use crate::utils::GlobalOptions;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line front end for the hotelier booking store.
#[derive(Parser)]
#[command(name = "hotelier")]
#[command(version, about = "Book hotel rooms and manage hotels", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "HOTELIER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true)]
    pub busy_timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Options shared by every command.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            data_dir: self.data_dir.clone(),
            busy_timeout: self.busy_timeout,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create the data directory and database
    Init(InitCommand),

    /// Create a manager account
    SeedManager(SeedManagerCommand),

    /// Create a hotel administered by a manager
    AddHotel(AddHotelCommand),

    /// Add a room to a hotel
    AddRoom(AddRoomCommand),

    /// Register a maintenance company
    AddCompany(AddCompanyCommand),

    /// Register a customer account
    Register(RegisterCommand),

    /// List hotels near a location
    Hotels(HotelsCommand),

    /// List rooms of a hotel free on a date
    Rooms(RoomsCommand),

    /// Book a room for a date
    Book(BookCommand),

    /// Show your most recent bookings
    Bookings(BookingsCommand),

    /// Change price and image of a room
    UpdateRoom(UpdateRoomCommand),

    /// Show recent room updates
    Updates(UpdatesCommand),

    /// Show bookings of your hotels
    History(HistoryCommand),

    /// Show the most frequent customers of a hotel
    Regulars(RegularsCommand),

    /// Request a room repair from a company
    Repair(RepairCommand),

    /// Show repairs you requested
    Repairs(RepairsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

impl Command {
    /// Run the selected command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), crate::error::CliError> {
        match self {
            Command::Init(cmd) => cmd.execute(global),
            Command::SeedManager(cmd) => cmd.execute(global),
            Command::AddHotel(cmd) => cmd.execute(global),
            Command::AddRoom(cmd) => cmd.execute(global),
            Command::AddCompany(cmd) => cmd.execute(global),
            Command::Register(cmd) => cmd.execute(global),
            Command::Hotels(cmd) => cmd.execute(global),
            Command::Rooms(cmd) => cmd.execute(global),
            Command::Book(cmd) => cmd.execute(global),
            Command::Bookings(cmd) => cmd.execute(global),
            Command::UpdateRoom(cmd) => cmd.execute(global),
            Command::Updates(cmd) => cmd.execute(global),
            Command::History(cmd) => cmd.execute(global),
            Command::Regulars(cmd) => cmd.execute(global),
            Command::Repair(cmd) => cmd.execute(global),
            Command::Repairs(cmd) => cmd.execute(global),
            Command::Completions(cmd) => cmd.execute(global),
        }
    }
}
