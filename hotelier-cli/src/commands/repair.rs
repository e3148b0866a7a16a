//! Repair request commands.

use crate::error::CliError;
use crate::utils::{
    authenticate, load_configuration, open_database, parse_date, AuthArgs, GlobalOptions,
};
use clap::Args;
use hotelier::gate::DatabaseGate;
use hotelier::{BookingDate, BookingManager, CompanyId, HotelId, QueryService, RoomNumber};

/// Request a repair of a room you administer.
#[derive(Args)]
pub struct RepairCommand {
    #[command(flatten)]
    pub auth: AuthArgs,

    /// Hotel id
    #[arg(long, value_name = "ID")]
    pub hotel: HotelId,

    /// Room number
    #[arg(long, value_name = "NUMBER")]
    pub room: RoomNumber,

    /// Maintenance company id
    #[arg(long, value_name = "ID")]
    pub company: CompanyId,

    /// Repair date (YYYY-MM-DD or MM/DD/YYYY)
    #[arg(long, value_parser = parse_date)]
    pub date: BookingDate,
}

impl RepairCommand {
    /// Execute the repair command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let gate = DatabaseGate::new();
        let manager = authenticate(&db, &gate, &self.auth)?;

        let repair = BookingManager::new(&mut db, &gate).file_repair_request(
            manager,
            self.hotel,
            self.room,
            self.company,
            self.date,
        )?;
        println!(
            "Requested repair {repair} of room {} of hotel {} on {}",
            self.room, self.hotel, self.date
        );
        Ok(())
    }
}

/// Show repairs you requested, newest repair date first.
#[derive(Args)]
pub struct RepairsCommand {
    #[command(flatten)]
    pub auth: AuthArgs,
}

impl RepairsCommand {
    /// Execute the repairs command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let gate = DatabaseGate::new();
        let manager = authenticate(&db, &gate, &self.auth)?;

        let records = QueryService::new(&db, &gate).repair_history(manager)?;
        if records.is_empty() && !global.quiet {
            println!("No repairs");
        }
        for record in records {
            let repair = record.repair;
            println!(
                "{}\t{}\thotel {} room {}\tcompany {}",
                repair.id, repair.repair_date, repair.hotel_id, repair.room_number, repair.company_id
            );
        }
        Ok(())
    }
}
