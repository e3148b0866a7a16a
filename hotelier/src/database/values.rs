//! Conversions between domain value types and `SQLite` values.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use crate::model::{
    BookingDate, BookingId, CompanyId, HotelId, Price, RepairId, RequestId, Role, RoomNumber,
    UpdateId, UserId,
};

macro_rules! sql_id {
    ($($name:ident),+ $(,)?) => {
        $(
            impl ToSql for $name {
                fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                    Ok(ToSqlOutput::from(self.value()))
                }
            }

            impl FromSql for $name {
                fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                    let raw = i64::column_result(value)?;
                    Self::try_from(raw).map_err(|e| FromSqlError::Other(Box::new(e)))
                }
            }
        )+
    };
}

sql_id!(UserId, HotelId, RoomNumber, BookingId, UpdateId, RepairId, RequestId, CompanyId);

impl ToSql for Price {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.value()))
    }
}

impl FromSql for Price {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = f64::column_result(value)?;
        Self::try_from(raw).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

impl ToSql for BookingDate {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for BookingDate {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        let date = NaiveDate::parse_from_str(text, crate::model::DATE_FORMAT)
            .map_err(|e| FromSqlError::Other(Box::new(e)))?;
        Self::try_from(date).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

impl ToSql for Role {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Role {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: crate::model::InvalidValueError| FromSqlError::Other(Box::new(e)))
    }
}

/// Converts a `SystemTime` to Unix seconds.
///
/// Times before the epoch are stored as 0.
pub(crate) fn systemtime_to_unix_secs(time: SystemTime) -> i64 {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
}

/// Converts Unix seconds back to a `SystemTime`.
pub(crate) fn unix_secs_to_systemtime(secs: i64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(u64::try_from(secs).unwrap_or(0))
}
