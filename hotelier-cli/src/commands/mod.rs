//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Create the data directory and database
//! - `seed`: Create managers, hotels, rooms and maintenance companies
//! - `register`: Register a customer account
//! - `browse`: List nearby hotels and free rooms
//! - `book`: Book a room, list your bookings
//! - `manage`: Update rooms, list updates, booking history and regulars
//! - `repair`: Request repairs, list your repair requests
//! - `completions`: Generate shell completion scripts

pub mod book;
pub mod browse;
pub mod completions;
pub mod init;
pub mod manage;
pub mod register;
pub mod repair;
pub mod seed;

pub use book::{BookCommand, BookingsCommand};
pub use browse::{HotelsCommand, RoomsCommand};
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use manage::{HistoryCommand, RegularsCommand, UpdateRoomCommand, UpdatesCommand};
pub use register::RegisterCommand;
pub use repair::{RepairCommand, RepairsCommand};
pub use seed::{AddCompanyCommand, AddHotelCommand, AddRoomCommand, SeedManagerCommand};
