//! Administrative seeding commands.
//!
//! Managers, hotels, rooms and maintenance companies have no self-service
//! flow; these commands create them directly in the store.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use hotelier::gate::DatabaseGate;
use hotelier::{GeoPoint, HotelId, NewHotel, Price, Role, Room, RoomNumber, UserId};

/// Create a manager account.
#[derive(Args)]
pub struct SeedManagerCommand {
    /// Display name of the manager
    #[arg(long)]
    pub name: String,

    /// Password of the new account
    #[arg(long, env = "HOTELIER_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl SeedManagerCommand {
    /// Execute the seed-manager command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let id = DatabaseGate::new().register(&mut db, &self.name, &self.password, Role::Manager)?;
        println!("{id}");
        Ok(())
    }
}

/// Create a hotel administered by a manager.
#[derive(Args)]
pub struct AddHotelCommand {
    /// Id of the administering manager
    #[arg(long, value_name = "ID")]
    pub manager: UserId,

    /// Hotel name
    #[arg(long)]
    pub name: String,

    /// Latitude of the hotel
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude of the hotel
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,
}

impl AddHotelCommand {
    /// Execute the add-hotel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let location = GeoPoint::new(self.lat, self.lon)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let id = db.create_hotel(&NewHotel {
            manager_id: self.manager,
            name: self.name,
            location,
        })?;
        println!("{id}");
        Ok(())
    }
}

/// Add a room to a hotel.
#[derive(Args)]
pub struct AddRoomCommand {
    /// Hotel id
    #[arg(long, value_name = "ID")]
    pub hotel: HotelId,

    /// Room number
    #[arg(long, value_name = "NUMBER")]
    pub room: RoomNumber,

    /// Nightly price
    #[arg(long)]
    pub price: Price,

    /// Image URL
    #[arg(long, default_value = "")]
    pub image_url: String,
}

impl AddRoomCommand {
    /// Execute the add-room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        db.create_room(&Room {
            hotel_id: self.hotel,
            room_number: self.room,
            price: self.price,
            image_url: self.image_url,
        })?;
        if !global.quiet {
            println!("Added room {} to hotel {}", self.room, self.hotel);
        }
        Ok(())
    }
}

/// Register a maintenance company.
#[derive(Args)]
pub struct AddCompanyCommand {
    /// Company name
    #[arg(long)]
    pub name: String,
}

impl AddCompanyCommand {
    /// Execute the add-company command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let id = db.create_company(&self.name)?;
        println!("{id}");
        Ok(())
    }
}
