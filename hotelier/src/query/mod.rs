//! Read-only aggregate queries for customers and managers.

mod service;

pub use service::QueryService;

/// Default number of rows in "recent" listings.
pub const DEFAULT_RECENT_LIMIT: u32 = 5;
