//! Straight-line distance between coordinate pairs.
//!
//! Distances are measured in coordinate-degree units, not kilometres: the
//! search radius of hotel lookups is expressed in the same unit.

#[cfg(test)]
mod proptests;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::InvalidValueError;

/// Default radius used by nearby-hotel searches.
pub const DEFAULT_SEARCH_RADIUS: f64 = 30.0;

/// Returns the Euclidean distance between two latitude/longitude points.
///
/// # Examples
///
/// ```
/// use hotelier::geo::distance;
///
/// assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
/// ```
#[must_use]
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    (lat1 - lat2).hypot(lon1 - lon2)
}

/// Returns `true` if `candidate` lies strictly within `radius` of `origin`.
#[must_use]
pub fn within_radius(origin: GeoPoint, candidate: GeoPoint, radius: f64) -> bool {
    origin.distance_to(candidate) < radius
}

/// A latitude/longitude pair with finite components.
///
/// # Examples
///
/// ```
/// use hotelier::GeoPoint;
///
/// let point = GeoPoint::new(40.7, -74.0).unwrap();
/// assert_eq!(point.latitude(), 40.7);
/// assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude.
    ///
    /// # Errors
    ///
    /// Returns an error if either component is NaN or infinite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidValueError> {
        if !latitude.is_finite() {
            return Err(InvalidValueError::new("latitude", "must be a finite number"));
        }
        if !longitude.is_finite() {
            return Err(InvalidValueError::new("longitude", "must be a finite number"));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    // Stored coordinates were validated on insert.
    pub(crate) const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in coordinate degrees.
    #[must_use]
    pub const fn latitude(self) -> f64 {
        self.latitude
    }

    /// Longitude in coordinate degrees.
    #[must_use]
    pub const fn longitude(self) -> f64 {
        self.longitude
    }

    /// Distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        distance(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
