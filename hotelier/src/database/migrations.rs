//! Schema creation and version checks for the booking store.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_BOOKINGS_TABLE, CREATE_COMPANIES_TABLE, CREATE_HOTELS_TABLE, CREATE_INDICES,
    CREATE_METADATA_TABLE, CREATE_REPAIRS_TABLE, CREATE_REPAIR_REQUESTS_TABLE,
    CREATE_ROOMS_TABLE, CREATE_UPDATE_LOGS_TABLE, CREATE_USERS_TABLE, CURRENT_SCHEMA_VERSION,
    INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

/// Initializes the database schema.
///
/// Creates all tables, indices, and the schema version entry. Every
/// statement is idempotent.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use hotelier::database::migrations::{get_schema_version, initialize_schema};
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// assert_eq!(get_schema_version(&conn).unwrap(), 1);
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;

    // Referenced tables first.
    for statement in [
        CREATE_USERS_TABLE,
        CREATE_HOTELS_TABLE,
        CREATE_ROOMS_TABLE,
        CREATE_COMPANIES_TABLE,
        CREATE_BOOKINGS_TABLE,
        CREATE_UPDATE_LOGS_TABLE,
        CREATE_REPAIRS_TABLE,
        CREATE_REPAIR_REQUESTS_TABLE,
    ] {
        conn.execute(statement, [])?;
    }

    for statement in CREATE_INDICES {
        conn.execute(statement, [])?;
    }

    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;

    log::info!("initialized database schema version {CURRENT_SCHEMA_VERSION}");
    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than a missing
/// metadata table or row (which both indicate version 0).
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value
            .parse::<i32>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e)))
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(rusqlite::Error::SqliteFailure(ref failure, _))
            if failure.code == rusqlite::ErrorCode::Unknown =>
        {
            // "no such table: metadata"
            Ok(0)
        }
        Err(e) => Err(e.into()),
    }
}

/// Checks schema compatibility and initializes if needed.
///
/// A fresh database is initialized; any other version than the current one
/// is rejected with [`Error::UnsupportedSchemaVersion`].
///
/// # Errors
///
/// Returns an error if the schema version is incompatible, initialization
/// fails, or the version query fails.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        initialize_schema(conn)?;
    } else if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    Ok(())
}
