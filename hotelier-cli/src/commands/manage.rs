//! Manager commands: room updates and the reports built on them.

use crate::error::CliError;
use crate::utils::{
    authenticate, format_timestamp, load_configuration, open_database, parse_date, AuthArgs,
    GlobalOptions,
};
use clap::Args;
use hotelier::gate::DatabaseGate;
use hotelier::{
    BookingDate, BookingManager, DateRange, HotelId, Price, QueryService, RoomNumber, UpdateScope,
};

/// Change the price and image of a room you administer.
#[derive(Args)]
pub struct UpdateRoomCommand {
    #[command(flatten)]
    pub auth: AuthArgs,

    /// Hotel id
    #[arg(long, value_name = "ID")]
    pub hotel: HotelId,

    /// Room number
    #[arg(long, value_name = "NUMBER")]
    pub room: RoomNumber,

    /// New nightly price
    #[arg(long)]
    pub price: Price,

    /// New image URL
    #[arg(long)]
    pub image_url: String,
}

impl UpdateRoomCommand {
    /// Execute the update-room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let gate = DatabaseGate::new();
        let manager = authenticate(&db, &gate, &self.auth)?;

        let log_row = BookingManager::new(&mut db, &gate).update_room_info(
            manager,
            self.hotel,
            self.room,
            self.price,
            &self.image_url,
        )?;
        println!(
            "Updated room {} of hotel {} (update {})",
            self.room, self.hotel, log_row.id
        );
        Ok(())
    }
}

/// Show recent room updates, newest first.
#[derive(Args)]
pub struct UpdatesCommand {
    #[command(flatten)]
    pub auth: AuthArgs,

    /// Include hotels administered by other managers
    #[arg(long)]
    pub all: bool,

    /// Number of updates to show (defaults to the configured limit)
    #[arg(long)]
    pub limit: Option<u32>,
}

impl UpdatesCommand {
    /// Execute the updates command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let limit = self.limit.unwrap_or_else(|| config.recent_limit());
        let scope = if self.all {
            UpdateScope::All
        } else {
            config.recent_updates_scope()
        };
        let db = open_database(global, &config)?;
        let gate = DatabaseGate::new();
        let manager = authenticate(&db, &gate, &self.auth)?;

        let updates = QueryService::new(&db, &gate).recent_room_updates(manager, scope, limit)?;
        if updates.is_empty() && !global.quiet {
            println!("No room updates");
        }
        for update in updates {
            println!(
                "{}\t{}\thotel {} room {}\tmanager {}",
                update.id,
                format_timestamp(update.updated_on),
                update.hotel_id,
                update.room_number,
                update.manager_id
            );
        }
        Ok(())
    }
}

/// Show bookings of every hotel you administer, newest first.
#[derive(Args)]
pub struct HistoryCommand {
    #[command(flatten)]
    pub auth: AuthArgs,

    /// First date of the range (inclusive)
    #[arg(long, value_parser = parse_date, requires = "to")]
    pub from: Option<BookingDate>,

    /// Last date of the range (inclusive)
    #[arg(long, value_parser = parse_date, requires = "from")]
    pub to: Option<BookingDate>,
}

impl HistoryCommand {
    /// Execute the history command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let range = match (self.from, self.to) {
            (Some(from), Some(to)) => Some(
                DateRange::new(from, to).map_err(|e| CliError::InvalidArguments(e.to_string()))?,
            ),
            _ => None,
        };
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let gate = DatabaseGate::new();
        let manager = authenticate(&db, &gate, &self.auth)?;

        let records = QueryService::new(&db, &gate).booking_history(manager, range)?;
        if records.is_empty() && !global.quiet {
            println!("No bookings");
        }
        for record in records {
            println!(
                "{}\t{}\thotel {} room {}\t{}\t{}",
                record.booking_id,
                record.booking_date,
                record.hotel_id,
                record.room_number,
                record.customer_name,
                record.price
            );
        }
        Ok(())
    }
}

/// Show the customers with the most bookings at one of your hotels.
#[derive(Args)]
pub struct RegularsCommand {
    #[command(flatten)]
    pub auth: AuthArgs,

    /// Hotel id
    #[arg(long, value_name = "ID")]
    pub hotel: HotelId,

    /// Number of customers to show (defaults to the configured limit)
    #[arg(long)]
    pub limit: Option<u32>,
}

impl RegularsCommand {
    /// Execute the regulars command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let limit = self.limit.unwrap_or_else(|| config.recent_limit());
        let db = open_database(global, &config)?;
        let gate = DatabaseGate::new();
        let manager = authenticate(&db, &gate, &self.auth)?;

        let regulars =
            QueryService::new(&db, &gate).regular_customers(manager, self.hotel, limit)?;
        if regulars.is_empty() && !global.quiet {
            println!("No bookings at hotel {}", self.hotel);
        }
        for regular in regulars {
            println!("{}\t{}\t{}", regular.customer_id, regular.name, regular.booking_count);
        }
        Ok(())
    }
}
